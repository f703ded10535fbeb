use tracing_test::traced_test;

use super::{log_call, log_call_result, Logged};

#[traced_test]
#[test]
fn log_call_logs_args_and_return_value() {
    let value = log_call("TestComponent", "add", (1, 2), |(a, b)| a + b);
    assert_eq!(value, 3);
    assert!(logs_contain("TestComponent.add args: (1, 2)"));
    assert!(logs_contain("TestComponent.add returned: i32 3"));
}

#[traced_test]
#[test]
fn log_call_result_logs_errors_when_enabled() {
    let r: Result<i32, String> =
        log_call_result("TestComponent", "fail", true, (), |()| Err("boom".to_owned()));
    assert_eq!(r, Err("boom".to_owned()));
    assert!(logs_contain("TestComponent.fail produced an error: \"boom\""));
}

#[traced_test]
#[test]
fn log_call_result_hides_errors_when_disabled() {
    let r: Result<i32, String> =
        log_call_result("TestComponent", "fail", false, (), |()| Err("boom".to_owned()));
    assert!(r.is_err());
    assert!(logs_contain("TestComponent.fail args: ()"));
    assert!(!logs_contain("produced an error"));
}

#[traced_test]
#[test]
fn logged_property() {
    let mut p = Logged::new("TestComponent", "title", "a".to_owned());
    p.set("b".to_owned());
    assert_eq!(p.get(), "b");
    assert!(logs_contain("TestComponent.title SET: \"b\""));
    assert!(logs_contain("TestComponent.title GET: \"b\""));
    assert_eq!(p.into_inner(), "b");
}
