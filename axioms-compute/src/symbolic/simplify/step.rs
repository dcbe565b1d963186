use std::fmt;

/// An identity applied by the simplifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// `a+0 = a`, `0+a = a`
    AddZero,

    /// `a+(-1*b) = a-b`
    AddNegation,

    /// `a-0 = a`
    SubtractZero,

    /// `0-a = -1*a`
    SubtractFromZero,

    /// `a*0 = 0`, `0*a = 0`
    MultiplyZero,

    /// `a*1 = a`, `1*a = a`
    MultiplyOne,

    /// `a*b^-1 = a/b`
    MultiplyReciprocal,

    /// `a/1 = a`
    DivideOne,

    /// `0/a = 0`
    DivideZero,

    /// `a^0 = 1`
    PowerZero,

    /// `a^1 = a`
    PowerOne,

    /// `1^a = 1`
    OnePower,

    /// `exp(0) = 1`
    ExpZero,

    /// `exp(ln(a)) = a`
    ExpLn,

    /// `ln(e) = 1`
    LnE,

    /// `ln(e^a) = a`
    LnPowerE,

    /// `ln(exp(a)) = a`
    LnExp,

    /// `sin(0) = 0`
    SinZero,

    /// `cos(0) = 1`
    CosZero,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let identity = match self {
            Self::AddZero => "a+0 = a",
            Self::AddNegation => "a+(-1*b) = a-b",
            Self::SubtractZero => "a-0 = a",
            Self::SubtractFromZero => "0-a = -1*a",
            Self::MultiplyZero => "a*0 = 0",
            Self::MultiplyOne => "a*1 = a",
            Self::MultiplyReciprocal => "a*b^(-1) = a/b",
            Self::DivideOne => "a/1 = a",
            Self::DivideZero => "0/a = 0",
            Self::PowerZero => "a^0 = 1",
            Self::PowerOne => "a^1 = a",
            Self::OnePower => "1^a = 1",
            Self::ExpZero => "exp(0) = 1",
            Self::ExpLn => "exp(ln(a)) = a",
            Self::LnE => "ln(e) = 1",
            Self::LnPowerE => "ln(e^a) = a",
            Self::LnExp => "ln(exp(a)) = a",
            Self::SinZero => "sin(0) = 0",
            Self::CosZero => "cos(0) = 1",
        };
        write!(f, "{}", identity)
    }
}
