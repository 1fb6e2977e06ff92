use std::cmp::Ordering;
use std::fmt::Display;
use std::str::FromStr;

use bigdecimal::BigDecimal;

use crate::PathError;

/// Comparison and addition over cost values.
/// The engine never assumes any numeric ordering of costs beyond what this
/// policy provides, so a custom implementation can carry any cost
/// representation through the algorithm.
pub trait CostArithmetic<C> {
    /// Total-order comparison of two cost values.
    fn compare(&self, a: &C, b: &C) -> Result<Ordering, PathError>;

    /// Combines the cumulative cost of a path with the weight of one more
    /// edge.
    fn combine(&self, a: &C, b: &C) -> Result<C, PathError>;

    /// The identity element of `combine`, used only for the degenerate query
    /// of the start node itself.
    fn zero(&self) -> Result<C, PathError>;
}

/// Default policy: costs are interpreted as exact decimal numbers parsed from
/// their `Display` form. This keeps comparisons and sums free of
/// floating-point drift when costs are supplied as strings or mixed numeric
/// types, at the price of a parse per operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecimalArithmetic;

impl DecimalArithmetic {
    fn parse<C: Display>(value: &C) -> Result<BigDecimal, PathError> {
        let text = value.to_string();
        text.parse().map_err(|_| PathError::MalformedCost(text))
    }
}

impl<C: Display + FromStr> CostArithmetic<C> for DecimalArithmetic {
    fn compare(&self, a: &C, b: &C) -> Result<Ordering, PathError> {
        Ok(Self::parse(a)?.cmp(&Self::parse(b)?))
    }

    fn combine(&self, a: &C, b: &C) -> Result<C, PathError> {
        // normalized() strips trailing zeros so "4" + "5.0" round-trips
        // through integer cost types as "9", not "9.0"
        let sum = (Self::parse(a)? + Self::parse(b)?).normalized();
        let text = sum.to_string();
        text.parse().map_err(|_| PathError::MalformedCost(text))
    }

    fn zero(&self) -> Result<C, PathError> {
        "0".parse().map_err(|_| PathError::MalformedCost("0".into()))
    }
}
