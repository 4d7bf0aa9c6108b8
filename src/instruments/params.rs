//! Shared option parameter record.
//!
//! This module provides the validated, immutable input contract consumed
//! by every pricing engine, including cost-of-carry resolution from named
//! product classes.

use num_traits::Float;

use super::error::InstrumentError;

/// Named product class resolving the cost-of-carry rate.
///
/// The generalized Black-Scholes formula unifies the classic model
/// variants through a single carry rate `b`:
///
/// | Product                  | b          |
/// |--------------------------|------------|
/// | Stock option             | `r`        |
/// | Stock option w/ dividend | `r - q`    |
/// | Futures option           | `0`        |
/// | Margined futures option  | `0`        |
/// | Currency option          | `r - rf`   |
///
/// # Examples
/// ```
/// use pricer_bsm::instruments::ProductClass;
///
/// let b = ProductClass::StockOptionWithDividend { dividend: 0.05 }
///     .cost_of_carry(0.10_f64);
/// assert!((b - 0.05).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProductClass<T: Float> {
    /// Option on a non-dividend-paying stock.
    StockOption,
    /// Option on a stock paying a continuous dividend yield.
    StockOptionWithDividend {
        /// Continuous dividend yield `q`.
        dividend: T,
    },
    /// Option on a futures contract.
    FuturesOption,
    /// Option on a futures contract with futures-style margining.
    MarginedFuturesOption,
    /// Currency (FX) option.
    CurrencyOption {
        /// Foreign risk-free rate `rf`.
        foreign_rate: T,
    },
}

impl<T: Float> ProductClass<T> {
    /// Resolves the cost-of-carry rate for this product class.
    #[inline]
    pub fn cost_of_carry(&self, rate: T) -> T {
        match *self {
            ProductClass::StockOption => rate,
            ProductClass::StockOptionWithDividend { dividend } => rate - dividend,
            ProductClass::FuturesOption | ProductClass::MarginedFuturesOption => T::zero(),
            ProductClass::CurrencyOption { foreign_rate } => rate - foreign_rate,
        }
    }
}

/// Immutable option parameter record.
///
/// Construction validates every domain precondition, so a record that
/// exists is safe to price: spot, strike, expiry and volatility are
/// strictly positive (the pricing formulas divide by
/// `volatility * sqrt(expiry)`), and the cost-of-carry has been resolved
/// exactly once, from either an explicit override or a product class.
///
/// The record is shared by value or immutable reference across engines
/// and threads; it has no interior mutability.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g. `f64`)
///
/// # Examples
/// ```
/// use pricer_bsm::instruments::{OptionParameters, ProductClass};
///
/// // Explicit carry rate.
/// let explicit = OptionParameters::new(100.0_f64, 95.0, 0.10, 0.5, 0.2, 0.05).unwrap();
///
/// // Same record through a product class.
/// let product = OptionParameters::from_product(
///     ProductClass::StockOptionWithDividend { dividend: 0.05 },
///     100.0_f64, 95.0, 0.10, 0.5, 0.2,
/// ).unwrap();
///
/// assert_eq!(explicit.cost_of_carry(), product.cost_of_carry());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionParameters<T: Float> {
    spot: T,
    strike: T,
    rate: T,
    expiry: T,
    volatility: T,
    cost_of_carry: T,
}

impl<T: Float> OptionParameters<T> {
    /// Creates a record with an explicit cost-of-carry rate.
    ///
    /// # Arguments
    /// * `spot` - Current underlying price (must be positive)
    /// * `strike` - Strike price (must be positive)
    /// * `rate` - Risk-free rate, annualised (any real)
    /// * `expiry` - Time to expiry in years (must be positive)
    /// * `volatility` - Annualised volatility (must be positive)
    /// * `cost_of_carry` - Carry rate `b` (any real)
    ///
    /// # Errors
    /// Returns [`InstrumentError::DomainViolation`] if any strictly
    /// positive precondition is violated.
    pub fn new(
        spot: T,
        strike: T,
        rate: T,
        expiry: T,
        volatility: T,
        cost_of_carry: T,
    ) -> Result<Self, InstrumentError> {
        check_positive("spot", spot)?;
        check_positive("strike", strike)?;
        check_positive("expiry", expiry)?;
        check_positive("volatility", volatility)?;

        Ok(Self {
            spot,
            strike,
            rate,
            expiry,
            volatility,
            cost_of_carry,
        })
    }

    /// Creates a record resolving the cost-of-carry from a product class.
    ///
    /// # Errors
    /// Returns [`InstrumentError::DomainViolation`] if any strictly
    /// positive precondition is violated.
    pub fn from_product(
        product: ProductClass<T>,
        spot: T,
        strike: T,
        rate: T,
        expiry: T,
        volatility: T,
    ) -> Result<Self, InstrumentError> {
        Self::new(
            spot,
            strike,
            rate,
            expiry,
            volatility,
            product.cost_of_carry(rate),
        )
    }

    /// Creates a new builder.
    ///
    /// The builder is the natural fit for a presentation layer where the
    /// carry specification arrives as an optional field: it fails with
    /// [`InstrumentError::UnresolvedCostOfCarry`] when neither an explicit
    /// rate nor a product class was given.
    #[inline]
    pub fn builder() -> OptionParametersBuilder<T> {
        OptionParametersBuilder::default()
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the time to expiry in years.
    #[inline]
    pub fn expiry(&self) -> T {
        self.expiry
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Returns the resolved cost-of-carry rate.
    #[inline]
    pub fn cost_of_carry(&self) -> T {
        self.cost_of_carry
    }
}

fn check_positive<T: Float>(parameter: &'static str, value: T) -> Result<(), InstrumentError> {
    if value <= T::zero() {
        return Err(InstrumentError::DomainViolation {
            parameter,
            value: value.to_f64().unwrap_or(f64::NAN),
        });
    }
    Ok(())
}

/// Builder for [`OptionParameters`].
///
/// Carry resolution: an explicit [`cost_of_carry`](Self::cost_of_carry)
/// overrides a [`product`](Self::product) when both are set; when neither
/// is set, `build` fails with [`InstrumentError::UnresolvedCostOfCarry`].
///
/// # Examples
/// ```
/// use pricer_bsm::instruments::{OptionParameters, ProductClass};
///
/// let params = OptionParameters::builder()
///     .spot(19.0_f64)
///     .strike(19.0)
///     .rate(0.10)
///     .expiry(0.75)
///     .volatility(0.28)
///     .product(ProductClass::FuturesOption)
///     .build()
///     .unwrap();
///
/// assert_eq!(params.cost_of_carry(), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct OptionParametersBuilder<T: Float> {
    spot: Option<T>,
    strike: Option<T>,
    rate: Option<T>,
    expiry: Option<T>,
    volatility: Option<T>,
    cost_of_carry: Option<T>,
    product: Option<ProductClass<T>>,
}

impl<T: Float> Default for OptionParametersBuilder<T> {
    fn default() -> Self {
        Self {
            spot: None,
            strike: None,
            rate: None,
            expiry: None,
            volatility: None,
            cost_of_carry: None,
            product: None,
        }
    }
}

impl<T: Float> OptionParametersBuilder<T> {
    /// Sets the spot price.
    #[inline]
    pub fn spot(mut self, spot: T) -> Self {
        self.spot = Some(spot);
        self
    }

    /// Sets the strike price.
    #[inline]
    pub fn strike(mut self, strike: T) -> Self {
        self.strike = Some(strike);
        self
    }

    /// Sets the risk-free rate.
    #[inline]
    pub fn rate(mut self, rate: T) -> Self {
        self.rate = Some(rate);
        self
    }

    /// Sets the time to expiry in years.
    #[inline]
    pub fn expiry(mut self, expiry: T) -> Self {
        self.expiry = Some(expiry);
        self
    }

    /// Sets the volatility.
    #[inline]
    pub fn volatility(mut self, volatility: T) -> Self {
        self.volatility = Some(volatility);
        self
    }

    /// Sets an explicit cost-of-carry rate (overrides any product class).
    #[inline]
    pub fn cost_of_carry(mut self, cost_of_carry: T) -> Self {
        self.cost_of_carry = Some(cost_of_carry);
        self
    }

    /// Sets a product class from which to resolve the cost-of-carry.
    #[inline]
    pub fn product(mut self, product: ProductClass<T>) -> Self {
        self.product = Some(product);
        self
    }

    /// Builds the record, validating domain preconditions and resolving
    /// the cost-of-carry.
    ///
    /// # Errors
    /// - [`InstrumentError::MissingParameter`] if a required field is unset
    /// - [`InstrumentError::DomainViolation`] on non-positive spot, strike,
    ///   expiry or volatility
    /// - [`InstrumentError::UnresolvedCostOfCarry`] if neither an explicit
    ///   rate nor a product class was supplied
    pub fn build(self) -> Result<OptionParameters<T>, InstrumentError> {
        let spot = require("spot", self.spot)?;
        let strike = require("strike", self.strike)?;
        let rate = require("rate", self.rate)?;
        let expiry = require("expiry", self.expiry)?;
        let volatility = require("volatility", self.volatility)?;

        let cost_of_carry = match (self.cost_of_carry, self.product) {
            (Some(b), _) => b,
            (None, Some(product)) => product.cost_of_carry(rate),
            (None, None) => return Err(InstrumentError::UnresolvedCostOfCarry),
        };

        OptionParameters::new(spot, strike, rate, expiry, volatility, cost_of_carry)
    }
}

fn require<V>(name: &'static str, field: Option<V>) -> Result<V, InstrumentError> {
    field.ok_or(InstrumentError::MissingParameter { name })
}
