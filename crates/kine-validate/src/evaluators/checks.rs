//! Shared constraint checks. All numeric comparisons are strict, so a value
//! equal to its bound passes.

use kine_core::models::finding::{Finding, Severity};

/// A checked parameter: wire name plus how to print it.
pub(super) struct Param {
    pub name: &'static str,
    pub label: &'static str,
    pub unit: &'static str,
}

impl Param {
    fn fmt(&self, value: f64) -> String {
        if self.unit.is_empty() {
            format!("{value}")
        } else {
            format!("{value} {}", self.unit)
        }
    }
}

pub(super) fn min(
    out: &mut Vec<Finding>,
    param: &Param,
    value: Option<f64>,
    bound: Option<f64>,
    severity: Severity,
) {
    if let (Some(value), Some(bound)) = (value, bound)
        && value < bound
    {
        out.push(Finding::parameter(
            severity,
            param.name,
            format!(
                "{}: {} is below the minimum of {}.",
                param.label,
                param.fmt(value),
                param.fmt(bound)
            ),
        ));
    }
}

pub(super) fn max(
    out: &mut Vec<Finding>,
    param: &Param,
    value: Option<f64>,
    bound: Option<f64>,
    severity: Severity,
) {
    if let (Some(value), Some(bound)) = (value, bound)
        && value > bound
    {
        out.push(Finding::parameter(
            severity,
            param.name,
            format!(
                "{}: {} exceeds the maximum of {}.",
                param.label,
                param.fmt(value),
                param.fmt(bound)
            ),
        ));
    }
}

pub(super) fn equals_number(
    out: &mut Vec<Finding>,
    param: &Param,
    value: Option<f64>,
    expected: Option<f64>,
    severity: Severity,
) {
    if let (Some(value), Some(expected)) = (value, expected)
        && value != expected
    {
        out.push(Finding::parameter(
            severity,
            param.name,
            format!(
                "{}: you used {}, but the case requires {}.",
                param.label,
                param.fmt(value),
                param.fmt(expected)
            ),
        ));
    }
}

pub(super) fn equals_text(
    out: &mut Vec<Finding>,
    param: &Param,
    value: Option<&str>,
    expected: Option<&str>,
    severity: Severity,
) {
    if let (Some(value), Some(expected)) = (value, expected)
        && value != expected
    {
        out.push(Finding::parameter(
            severity,
            param.name,
            format!(
                "{}: you used {value}, but the case requires {expected}.",
                param.label
            ),
        ));
    }
}

pub(super) fn one_of_text(
    out: &mut Vec<Finding>,
    param: &Param,
    value: Option<&str>,
    allowed: Option<&[String]>,
    severity: Severity,
) {
    if let (Some(value), Some(allowed)) = (value, allowed)
        && !allowed.iter().any(|a| a == value)
    {
        out.push(Finding::parameter(
            severity,
            param.name,
            format!(
                "{}: {value} is not one of the accepted values ({}).",
                param.label,
                allowed.join(", ")
            ),
        ));
    }
}

pub(super) fn one_of_number(
    out: &mut Vec<Finding>,
    param: &Param,
    value: Option<f64>,
    allowed: Option<&[f64]>,
    severity: Severity,
) {
    if let (Some(value), Some(allowed)) = (value, allowed)
        && !allowed.contains(&value)
    {
        let listed = allowed
            .iter()
            .map(|a| param.fmt(*a))
            .collect::<Vec<_>>()
            .join(", ");
        out.push(Finding::parameter(
            severity,
            param.name,
            format!(
                "{}: {} is not one of the suggested values ({listed}).",
                param.label,
                param.fmt(value)
            ),
        ));
    }
}
