//! Integration tests for requirement dispatch and the error taxonomy

use std::error::Error;

use reqs::prelude::*;
use reqs::requirement::verify;
use reqs::testing::failing;
use reqs::{
    assert_invalid_argument, assert_post_condition_failed, assert_pre_condition_failed,
    assert_requirement_failed,
};

const MSG: &str = "AlwaysFalse predicate does not evaluate to true, as expected.";

#[test]
fn each_dispatch_function_raises_its_kind() {
    assert_invalid_argument!(parameter_condition(&always_false(), &"any", MSG), MSG);
    assert_requirement_failed!(condition(&always_false(), &"any", MSG), MSG);
    assert_pre_condition_failed!(pre_condition(&always_false(), &"any", MSG), MSG);
    assert_post_condition_failed!(post_condition(&always_false(), &"any", MSG), MSG);
}

#[test]
fn each_dispatch_function_passes_with_always_true() {
    let values: [Option<i32>; 2] = [None, Some(7)];
    for value in &values {
        assert!(parameter_condition(&always_true(), value, MSG).is_ok());
        assert!(condition(&always_true(), value, MSG).is_ok());
        assert!(pre_condition(&always_true(), value, MSG).is_ok());
        assert!(post_condition(&always_true(), value, MSG).is_ok());
    }
}

#[test]
fn pre_and_post_conditions_are_requirements() {
    let pre = pre_condition(&always_false(), &0, "pre").unwrap_err();
    let post = post_condition(&always_false(), &0, "post").unwrap_err();
    let plain = condition(&always_false(), &0, "plain").unwrap_err();
    let param = parameter_condition(&always_false(), &0, "param").unwrap_err();

    assert!(pre.is_requirement() && pre.is_pre_condition() && !pre.is_post_condition());
    assert!(post.is_requirement() && post.is_post_condition() && !post.is_pre_condition());
    assert!(plain.is_requirement() && !plain.is_pre_condition());
    assert!(!param.is_requirement());
}

#[test]
fn messages_carry_category_prefix() {
    let cases = [
        (RequirementKind::InvalidArgument, "Parameter requirement not verified: m"),
        (RequirementKind::Requirement, "Requirement not verified: m"),
        (RequirementKind::PreCondition, "Pre-condition not verified: m"),
        (RequirementKind::PostCondition, "Post-condition not verified: m"),
    ];
    for (kind, expected) in cases {
        let err = verify(kind, &always_false(), &(), "m").unwrap_err();
        assert_eq!(err.kind(), kind);
        assert_eq!(err.to_string(), expected);
    }
}

#[test]
fn predicate_errors_propagate_unchanged() {
    // the leaf rejects None before the post-condition can judge
    let err = post_condition(&empty_string(), &None::<String>, "output").unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(
        err.message(),
        "Parameter requirement not verified: String input parameter must not be null."
    );

    let err = condition(&failing("broken member"), &1, "outer").unwrap_err();
    assert!(err.message().ends_with("broken member"));
    assert!(!err.message().contains("outer"));
}

#[test]
fn not_null_scenarios() {
    assert!(!not_null().apply(&None::<Box<dyn std::any::Any>>).unwrap());
    assert!(not_null().apply(&Some(Box::new(()) as Box<dyn std::any::Any>)).unwrap());
}

#[test]
fn blank_string_scenarios() {
    assert!(blank_string().apply("   \t").unwrap());
    assert!(!blank_string().apply("x").unwrap());
    assert!(blank_string().apply(&None::<&str>).unwrap());
}

#[test]
fn pattern_scenario() {
    let p = contains_pattern("hel.*").unwrap().and(not_blank_string());
    assert!(p.apply("hello").unwrap());
    assert!(!p.apply("hero").unwrap());
}

#[test]
fn invalid_pattern_keeps_cause() {
    let err = contains_pattern("(").unwrap_err();
    assert!(err.is_invalid_argument());
    assert!(err.source().is_some());
}

#[test]
fn contract_style_function() {
    fn average(values: &[f64]) -> Result<f64, RequirementError> {
        parameter_condition(&not_empty_collection(), values, "values must not be empty")?;
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        post_condition(&|m: &f64| m.is_finite(), &mean, "mean must be finite")?;
        Ok(mean)
    }

    assert_eq!(average(&[1.0, 2.0, 3.0]).unwrap(), 2.0);
    let err = average(&[]).unwrap_err();
    assert_eq!(err.to_string(), "Parameter requirement not verified: values must not be empty");
    assert!(average(&[f64::MAX, f64::MAX]).unwrap_err().is_post_condition());
}

#[test]
fn ensure_and_present_thread_values() {
    let port = present(Some(8080u16), "Port parameter must not be null.")
        .and_then(|p| ensure(p, &strictly_positive(), RequirementKind::InvalidArgument, "port"))
        .unwrap();
    assert_eq!(port, 8080);

    let err = present(None::<u16>, "Port parameter must not be null.").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Parameter requirement not verified: Port parameter must not be null."
    );
}

#[test]
fn errors_are_cloneable_and_send() {
    fn assert_send_sync<T: Send + Sync + 'static>(_: &T) {}
    let err = condition(&always_false(), &1, "m").unwrap_err();
    assert_send_sync(&err);
    let copy = err.clone();
    assert_eq!(copy.to_string(), err.to_string());
}
