//! Times of astronomical new moon.
//!
//! Implements the corrected new-moon series of Jean Meeus, *Astronomical
//! Algorithms* (2nd ed.), chapter 49: the mean phase polynomial, the periodic
//! terms for the new-moon phase (table 49.A) and the fourteen additional
//! planetary arguments. Accuracy is a few minutes between 1000 and 3000 CE.
//!
//! Lunation `k = 0` is the new moon of 6 January 2000. The series yields
//! Julian Ephemeris Days, which are used as UTC with no Delta T correction.

use chrono::{DateTime, Utc};

/// Mean synodic month in days.
pub const MEAN_SYNODIC_MONTH: f64 = 29.530588861;

/// JDE of the mean new moon of lunation 0.
pub const JDE_LUNATION_ZERO: f64 = 2451550.09766;

/// Julian day of 1970-01-01T00:00:00Z.
pub const JD_UNIX_EPOCH: f64 = 2440587.5;

const LUNATIONS_PER_CENTURY: f64 = 1236.85;
const MICROS_PER_DAY: f64 = 86_400_000_000.0;
const MICROS_PER_SECOND: i64 = 1_000_000;

/// Periodic terms for the new-moon phase.
///
/// (coefficient, power of E, multiples of M, M', F, Omega)
#[rustfmt::skip]
const NEW_MOON_TERMS: [(f64, i32, f64, f64, f64, f64); 25] = [
    (-0.40720, 0,  0.0, 1.0,  0.0, 0.0),
    ( 0.17241, 1,  1.0, 0.0,  0.0, 0.0),
    ( 0.01608, 0,  0.0, 2.0,  0.0, 0.0),
    ( 0.01039, 0,  0.0, 0.0,  2.0, 0.0),
    ( 0.00739, 1, -1.0, 1.0,  0.0, 0.0),
    (-0.00514, 1,  1.0, 1.0,  0.0, 0.0),
    ( 0.00208, 2,  2.0, 0.0,  0.0, 0.0),
    (-0.00111, 0,  0.0, 1.0, -2.0, 0.0),
    (-0.00057, 0,  0.0, 1.0,  2.0, 0.0),
    ( 0.00056, 1,  1.0, 2.0,  0.0, 0.0),
    (-0.00042, 0,  0.0, 3.0,  0.0, 0.0),
    ( 0.00042, 1,  1.0, 0.0,  2.0, 0.0),
    ( 0.00038, 1,  1.0, 0.0, -2.0, 0.0),
    (-0.00024, 1, -1.0, 2.0,  0.0, 0.0),
    (-0.00017, 0,  0.0, 0.0,  0.0, 1.0),
    (-0.00007, 0,  2.0, 1.0,  0.0, 0.0),
    ( 0.00004, 0,  0.0, 2.0, -2.0, 0.0),
    ( 0.00004, 0,  3.0, 0.0,  0.0, 0.0),
    ( 0.00003, 0,  1.0, 1.0, -2.0, 0.0),
    ( 0.00003, 0,  0.0, 2.0,  2.0, 0.0),
    (-0.00003, 0,  1.0, 1.0,  2.0, 0.0),
    ( 0.00003, 0, -1.0, 1.0,  2.0, 0.0),
    (-0.00002, 0, -1.0, 1.0, -2.0, 0.0),
    (-0.00002, 0,  1.0, 3.0,  0.0, 0.0),
    ( 0.00002, 0,  0.0, 4.0,  0.0, 0.0),
];

/// Additional planetary corrections A1..A14.
///
/// (coefficient, argument at k = 0, degrees per lunation, T^2 term)
#[rustfmt::skip]
const PLANETARY_TERMS: [(f64, f64, f64, f64); 14] = [
    (0.000325, 299.77,  0.107408, -0.009173),
    (0.000165, 251.88,  0.016321, 0.0),
    (0.000164, 251.83, 26.651886, 0.0),
    (0.000126, 349.42, 36.412478, 0.0),
    (0.000110,  84.66, 18.206239, 0.0),
    (0.000062, 141.74, 53.303771, 0.0),
    (0.000060, 207.14,  2.453732, 0.0),
    (0.000056, 154.84,  7.306860, 0.0),
    (0.000047,  34.52, 27.261239, 0.0),
    (0.000042, 207.19,  0.121824, 0.0),
    (0.000040, 291.34,  1.844379, 0.0),
    (0.000037, 161.72, 24.198154, 0.0),
    (0.000035, 239.56, 25.513099, 0.0),
    (0.000023, 331.55,  3.592518, 0.0),
];

/// JDE of the true new moon of lunation `k`.
pub fn new_moon_jde(k: i64) -> f64 {
    let k = k as f64;
    let t = k / LUNATIONS_PER_CENTURY;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let mean = JDE_LUNATION_ZERO + MEAN_SYNODIC_MONTH * k + 0.00015437 * t2
        - 0.000000150 * t3
        + 0.00000000073 * t4;

    // Sun's mean anomaly
    let m = (2.5534 + 29.10535670 * k - 0.0000014 * t2 - 0.00000011 * t3).rem_euclid(360.0);
    // Moon's mean anomaly
    let m_prime = (201.5643 + 385.81693528 * k + 0.0107582 * t2 + 0.00001238 * t3
        - 0.000000058 * t4)
        .rem_euclid(360.0);
    // Moon's argument of latitude
    let f = (160.7108 + 390.67050284 * k - 0.0016118 * t2 - 0.00000227 * t3
        + 0.000000011 * t4)
        .rem_euclid(360.0);
    // Longitude of the ascending node
    let omega = (124.7746 - 1.56375588 * k + 0.0020672 * t2 + 0.00000215 * t3).rem_euclid(360.0);

    let e = 1.0 - 0.002516 * t - 0.0000074 * t2;

    let periodic: f64 = NEW_MOON_TERMS
        .iter()
        .map(|&(coefficient, e_power, cm, cm_prime, cf, comega)| {
            let argument = cm * m + cm_prime * m_prime + cf * f + comega * omega;
            coefficient * e.powi(e_power) * argument.to_radians().sin()
        })
        .sum();

    let planetary: f64 = PLANETARY_TERMS
        .iter()
        .map(|&term| term.0 * planetary_argument(term, k, t2).to_radians().sin())
        .sum();

    mean + periodic + planetary
}

/// Argument of one planetary term in degrees, reduced to `[0, 360)`.
fn planetary_argument((_, base, rate, quadratic): (f64, f64, f64, f64), k: f64, t2: f64) -> f64 {
    (base + rate * k + quadratic * t2).rem_euclid(360.0)
}

/// Converts a JDE to a UTC instant, rounded to the microsecond.
///
/// Returns `None` when the instant is outside the range chrono can represent.
pub fn jde_to_instant(jde: f64) -> Option<DateTime<Utc>> {
    let micros = ((jde - JD_UNIX_EPOCH) * MICROS_PER_DAY).round();
    if !micros.is_finite() {
        return None;
    }
    let micros = micros as i64;
    let nanos = micros.rem_euclid(MICROS_PER_SECOND) * 1_000;
    DateTime::from_timestamp(micros.div_euclid(MICROS_PER_SECOND), nanos as u32)
}

/// Converts a UTC instant to a JDE.
pub fn instant_to_jde(instant: DateTime<Utc>) -> f64 {
    instant.timestamp_micros() as f64 / MICROS_PER_DAY + JD_UNIX_EPOCH
}

/// Fractional lunation count at `jde`, from mean motion alone.
pub fn mean_lunation(jde: f64) -> f64 {
    (jde - JDE_LUNATION_ZERO) / MEAN_SYNODIC_MONTH
}

/// UTC instant of the true new moon of lunation `k`.
pub fn new_moon_instant(k: i64) -> Option<DateTime<Utc>> {
    jde_to_instant(new_moon_jde(k))
}
