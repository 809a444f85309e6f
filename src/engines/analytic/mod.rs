//! Closed-form analytic pricing kernels.

pub mod black_scholes;
