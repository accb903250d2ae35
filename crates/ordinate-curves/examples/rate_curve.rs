//! Builds a small money-market curve on a tenor axis, shifts it and merges
//! it with a spread curve.
//!
//! Run with: RUST_LOG=ordinate_curves=debug cargo run -p ordinate-curves --example rate_curve

use ordinate_curves::prelude::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,ordinate_curves=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Zero rates on a tenor axis, settling two days out
    let config = CurveConfig::from_json(r#"{"extrapolation": "Flat"}"#)?;
    let zero = Curve::from_tenor_strs(
        &["1W", "1M", "3M", "6M", "1Y", "2Y", "5Y", "10Y"],
        vec![0.0393, 0.0391, 0.0381, 0.0377, 0.0359, 0.0350, 0.0360, 0.0402],
        2.0,
        config,
    )?;
    info!(points = zero.len(), domain = ?zero.domain(), "zero curve");
    println!("zero:      {zero}");

    for tenor in ["2W", "9M", "3Y", "30Y"] {
        println!("  {tenor:>3} -> {:.5}", zero.evaluate(tenor)?);
    }

    // Discount factors interpolated log-linearly
    let discount = apply(&zero, |days, rate| (-rate * days / 365.0).exp())?
        .rebuild(|cfg| cfg.with_logy(true).with_extrapolation(ExtrapolationMethod::Linear))?;
    println!("discount:  {discount}");
    println!("  DF(18M) = {:.6}", discount.evaluate(Tenor::months(18)?)?);

    // A credit spread on its own grid; the sum lives on the union of both
    let spread = Curve::from_tenors(
        &[Tenor::Y1, Tenor::Y5, Tenor::Y10],
        vec![0.0080, 0.0120, 0.0150],
        2.0,
        CurveConfig::default(),
    )?;
    let shifted = (&zero + 0.0010)?;
    let risky = (&shifted + &spread)?;
    println!("risky:     {risky}");

    // Keep only the long end
    let long_end = filter(&risky, Axis::X, |days| days >= 365.0)?;
    println!(
        "long end:  {} points from {:.0} to {:.0} days",
        long_end.len(),
        first_point(&long_end, 1)?,
        last_point(&long_end, 1)?
    );

    Ok(())
}
