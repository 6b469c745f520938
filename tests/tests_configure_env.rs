use std::env;
use std::fs;

use gdt_console::configure::{load_config_from, SERVICE_TAG};
use gdt_console::fault::FaultPolicy;
use gdt_console::DiagnosticEmitter;

// Environment variables are process-wide, so everything runs in a single test.
#[test]
fn test_environment_overrides_file_and_defaults() {
    let dir = env::temp_dir().join(format!("gdt_console_env_{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("emitter.yaml");
    fs::write(&path, "service_tag: \"[File]\"\nfault_policy: panic\n").unwrap();
    let path = path.to_str().unwrap();

    env::set_var("GDT_SERVICE_TAG", "[Env]");
    env::set_var("GDT_FAULT_POLICY", "log_only");

    let cfg = load_config_from(path).unwrap();
    assert_eq!(cfg.service_tag, "[Env]");
    assert_eq!(cfg.fault_policy, FaultPolicy::LogOnly);

    let cfg = load_config_from("config/does_not_exist").unwrap();
    assert_eq!(cfg.service_tag, "[Env]");
    assert_eq!(cfg.fault_policy, FaultPolicy::LogOnly);

    let emitter = DiagnosticEmitter::from_config(&cfg);
    assert_eq!(emitter.service_tag(), "[Env]");
    assert_eq!(emitter.fault_policy(), FaultPolicy::LogOnly);

    // one variable set: the other key falls back to the file
    env::remove_var("GDT_FAULT_POLICY");
    let cfg = load_config_from(path).unwrap();
    assert_eq!(cfg.service_tag, "[Env]");
    assert_eq!(cfg.fault_policy, FaultPolicy::Panic);

    env::remove_var("GDT_SERVICE_TAG");
    let cfg = load_config_from(path).unwrap();
    assert_eq!(cfg.service_tag, "[File]");

    let cfg = load_config_from("config/does_not_exist").unwrap();
    assert_eq!(cfg.service_tag, SERVICE_TAG);
    assert_eq!(cfg.fault_policy, FaultPolicy::DebugAssert);

    fs::remove_dir_all(&dir).ok();
}
