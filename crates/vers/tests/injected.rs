use vers::BuildInfo;

#[vers::main(version = "1.4.2", commit = "a1b2c3d")]
fn start() {}

#[vers::main(version = "9.9.9", commit = "fffffff")]
fn start_again() {}

fn init() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    start();
}

#[test]
fn accessors_return_injected_values() {
    init();
    assert_eq!(vers::version(), "1.4.2");
    assert_eq!(vers::commit(), "a1b2c3d");
    assert_eq!(vers::build_info(), &BuildInfo::new("1.4.2", "a1b2c3d"));
}

#[test]
fn reads_are_stable() {
    init();
    let version = vers::version();
    let commit = vers::commit();
    for _ in 0..1_000 {
        assert_eq!(vers::version(), version);
        assert_eq!(vers::commit(), commit);
    }
}

#[test]
fn first_install_wins() {
    init();
    start_again();
    assert_eq!(vers::version(), "1.4.2");
    assert_eq!(vers::commit(), "a1b2c3d");
    assert!(!vers::__install(BuildInfo::new("0.0.1", "")));
    assert_eq!(vers::version(), "1.4.2");
}

#[test]
fn display_for_version_flag() {
    init();
    assert_eq!(vers::build_info().to_string(), "1.4.2 (a1b2c3d)");
}
