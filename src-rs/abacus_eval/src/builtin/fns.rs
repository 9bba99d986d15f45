use crate::error::DomainReason;

/// Why an operation could not produce a value
pub enum Failure {
    Domain(DomainReason),
    Overflow,
}

type Result = std::result::Result<f64, Failure>;

pub fn sin(degrees: f64) -> Result {
    Ok(degrees.to_radians().sin())
}

pub fn cos(degrees: f64) -> Result {
    Ok(degrees.to_radians().cos())
}

pub fn tan(degrees: f64) -> Result {
    Ok(degrees.to_radians().tan())
}

// NaN fails every comparison below, so it is rejected as out of domain

pub fn sqrt(value: f64) -> Result {
    if value >= 0.0 {
        Ok(value.sqrt())
    } else {
        Err(Failure::Domain(DomainReason::NegativeSquareRoot))
    }
}

pub fn log10(value: f64) -> Result {
    if value > 0.0 {
        Ok(value.log10())
    } else {
        Err(Failure::Domain(DomainReason::NonPositiveLog))
    }
}

pub fn ln(value: f64) -> Result {
    if value > 0.0 {
        Ok(value.ln())
    } else {
        Err(Failure::Domain(DomainReason::NonPositiveLn))
    }
}

pub fn square(value: f64) -> Result {
    let squared = value.powi(2);
    if value.is_finite() && squared.is_infinite() {
        Err(Failure::Overflow)
    } else {
        Ok(squared)
    }
}

pub fn factorial(value: f64) -> Result {
    let is_non_negative_integer = value >= 0.0 && value.fract() == 0.0;
    if !is_non_negative_integer {
        return Err(Failure::Domain(
            DomainReason::FactorialNotNonNegativeInteger,
        ));
    }

    let mut product = 1.0;
    let mut factor = 2.0;
    while factor <= value {
        product *= factor;
        if product.is_infinite() {
            return Err(Failure::Overflow);
        }
        factor += 1.0;
    }

    Ok(product)
}
