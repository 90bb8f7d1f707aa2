// ABOUTME: Clinical reference values for geriatric fall-risk assessment and cohort synthesis
// ABOUTME: Citation-backed constants shared by the analysis engine and the data synthesizer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vigil Care Intelligence

//! Clinical constants based on geriatrics and fall-prevention research
//!
//! This module contains clinically-established reference values used by the
//! risk analysis engine and by the synthetic cohort generator. Values are
//! drawn from peer-reviewed research and public-health guidance so synthetic
//! patients and analysis thresholds describe the same population.

/// Age thresholds for fall-risk stratification
///
/// References:
/// - Rubenstein, L.Z. (2006). Falls in older people: epidemiology, risk factors
///   and strategies for prevention. Age and Ageing.
///   https://pubmed.ncbi.nlm.nih.gov/16926202/
/// - WHO Global Report on Falls Prevention in Older Age (2007)
pub mod age_risk {
    /// Age at which fall risk rises sharply (oldest-old cohort)
    /// Reference: Rubenstein (2006), incidence roughly doubles past 80
    pub const ADVANCED_AGE_YEARS: u32 = 85;

    /// Age at which age-related risk factors become clinically relevant
    /// Reference: CDC STEADI risk stratification, https://www.cdc.gov/steadi/
    pub const ELEVATED_AGE_YEARS: u32 = 75;

    /// Reference age anchoring all age-adjusted baselines below
    /// Community-dwelling adults at 65 define the unadjusted values
    pub const BASELINE_REFERENCE_AGE: u32 = 65;
}

/// Expected daily activity for community-dwelling older adults
///
/// References:
/// - Tudor-Locke, C. et al. (2011). How many steps/day are enough? For older
///   adults and special populations. IJBNPA.
///   https://www.ncbi.nlm.nih.gov/pmc/articles/PMC3169444/
/// - Harvey, J.A., Chastin, S.F., & Skelton, D.A. (2015). How sedentary are
///   older people? A systematic review.
pub mod activity_baselines {
    /// Expected daily steps for a 65-year-old male
    /// Reference: Tudor-Locke (2011), healthy older adults 2000-9000 steps/day
    pub const MALE_DAILY_STEPS: f64 = 6000.0;

    /// Expected daily steps for a 65-year-old female
    pub const FEMALE_DAILY_STEPS: f64 = 5500.0;

    /// Average decline in daily steps per year of age past the reference age
    pub const STEPS_DECLINE_PER_YEAR: f64 = 100.0;

    /// Expected daily standing time for a 65-year-old male (minutes)
    pub const MALE_STANDING_MINUTES: f64 = 180.0;

    /// Expected daily standing time for a 65-year-old female (minutes)
    pub const FEMALE_STANDING_MINUTES: f64 = 160.0;

    /// Average decline in standing minutes per year of age
    pub const STANDING_DECLINE_PER_YEAR: f64 = 2.0;

    /// Expected sit-to-stand and room-to-room transitions per day
    pub const DAILY_MOVEMENT_EPISODES: f64 = 40.0;

    /// Average decline in movement episodes per year of age
    pub const MOVEMENT_DECLINE_PER_YEAR: f64 = 0.5;

    /// Expected self-reported sleep quality on a 1-10 scale
    /// Scale analog of the Pittsburgh Sleep Quality Index
    /// Reference: Buysse, D.J. et al. (1989). The Pittsburgh Sleep Quality Index
    pub const SLEEP_QUALITY_SCORE: f64 = 8.0;

    /// Average decline in sleep quality score per year of age
    pub const SLEEP_DECLINE_PER_YEAR: f64 = 0.05;

    /// Lower bound of the sleep quality scale
    pub const SLEEP_SCORE_MIN: f64 = 1.0;

    /// Upper bound of the sleep quality scale
    pub const SLEEP_SCORE_MAX: f64 = 10.0;
}

/// Gait reference values and physiologic floors
///
/// References:
/// - Studenski, S. et al. (2011). Gait Speed and Survival in Older Adults. JAMA.
///   https://pubmed.ncbi.nlm.nih.gov/21205966/
/// - Hollman, J.H., McDade, E.M., & Petersen, R.C. (2011). Normative
///   spatiotemporal gait parameters in older adults. Gait & Posture.
///   https://pubmed.ncbi.nlm.nih.gov/21531139/
/// - Hausdorff, J.M., Rios, D.A., & Edelberg, H.K. (2001). Gait variability and
///   fall risk in community-living older adults.
///   https://pubmed.ncbi.nlm.nih.gov/11494184/
pub mod gait_reference {
    /// Usual gait speed for a healthy 65-year-old (m/s)
    /// Reference: Studenski (2011), median survival pivots near 1.0 m/s
    pub const BASE_SPEED_MS: f64 = 1.2;

    /// Average gait speed decline per year of age (m/s)
    /// Reference: Hollman (2011) normative tables, ~0.01 m/s per year
    pub const SPEED_DECLINE_PER_YEAR_MS: f64 = 0.01;

    /// Floor for age-adjusted reference gait speed (m/s)
    pub const SPEED_FLOOR_MS: f64 = 0.6;

    /// Starting gait speed when a gait-impairing condition is present (m/s)
    /// Reference: household ambulation threshold, Perry et al. (1995)
    pub const IMPAIRED_BASE_SPEED_MS: f64 = 0.6;

    /// Starting gait speed without gait-impairing conditions (m/s)
    pub const UNIMPAIRED_BASE_SPEED_MS: f64 = 1.0;

    /// Hard floor for any generated walking speed (m/s)
    pub const MINIMUM_SPEED_MS: f64 = 0.4;

    /// Reference stride length at 65 (meters)
    /// Reference: Hollman (2011) normative tables
    pub const STRIDE_LENGTH_M: f64 = 0.6;

    /// Average stride length decline per year of age (meters)
    pub const STRIDE_DECLINE_PER_YEAR_M: f64 = 0.005;

    /// Floor for generated stride length (meters)
    pub const STRIDE_FLOOR_M: f64 = 0.3;

    /// Perfect left/right step symmetry ratio
    pub const STEP_SYMMETRY: f64 = 1.0;

    /// Average symmetry decline per year of age
    pub const SYMMETRY_DECLINE_PER_YEAR: f64 = 0.01;

    /// Floor for generated step symmetry
    pub const SYMMETRY_FLOOR: f64 = 0.3;

    /// Reference turning speed at 65 (degrees per second)
    /// Reference: Timed Up and Go turn phase, Podsiadlo & Richardson (1991)
    pub const TURN_SPEED_DEG_S: f64 = 90.0;

    /// Average turning speed decline per year of age (degrees per second)
    pub const TURN_DECLINE_PER_YEAR: f64 = 0.5;

    /// Floor for generated turning speed (degrees per second)
    pub const TURN_SPEED_FLOOR_DEG_S: f64 = 30.0;

    /// Reference stride-to-stride length variability at 65 (coefficient)
    /// Reference: Hausdorff (2001), variability above ~0.3 predicts falls
    pub const STRIDE_VARIABILITY: f64 = 0.1;

    /// Average variability increase per year of age
    pub const VARIABILITY_INCREASE_PER_YEAR: f64 = 0.005;

    /// Ceiling for generated stride variability
    pub const VARIABILITY_CEILING: f64 = 0.4;

    /// Top score on the 0-10 balance scale (Berg Balance Scale analog)
    /// Reference: Berg, K.O. et al. (1992). Measuring balance in the elderly
    pub const BALANCE_SCORE_MAX: f64 = 10.0;

    /// Average balance score decline per year of age
    pub const BALANCE_DECLINE_PER_YEAR: f64 = 0.1;

    /// Floor for generated balance scores
    pub const BALANCE_FLOOR: f64 = 3.0;
}

/// Cognitive screening scale parameters
///
/// Reference: Nasreddine, Z.S. et al. (2005). The Montreal Cognitive
/// Assessment: a brief screening tool for mild cognitive impairment. JAGS.
pub mod cognition {
    /// Top score on the 0-10 cognitive screen
    pub const COGNITIVE_SCORE_MAX: f64 = 10.0;

    /// Average cognitive score decline per year of age
    pub const COGNITIVE_DECLINE_PER_YEAR: f64 = 0.15;

    /// Floor for generated cognitive scores
    pub const COGNITIVE_FLOOR: f64 = 3.0;
}

/// Weights and cutoffs for the intake fall-risk score
///
/// Additive point model in the style of the Morse Fall Scale
/// Reference: Morse, J.M., Morse, R.M., & Tylko, S.J. (1989). Development of a
/// scale to identify the fall-prone patient.
pub mod intake_scoring {
    /// Points added per previously recorded fall
    /// Prior falls are the strongest single predictor
    /// Reference: Ganz, D.A. et al. (2007). Will my patient fall? JAMA.
    ///   https://pubmed.ncbi.nlm.nih.gov/17244835/
    pub const PREVIOUS_FALL_WEIGHT: u32 = 2;

    /// Hazard score at or above which the home scores maximum points
    pub const HAZARD_SCORE_SEVERE: u32 = 6;

    /// Hazard score at or above which the home scores elevated points
    pub const HAZARD_SCORE_ELEVATED: u32 = 3;

    /// Total points at or above which intake risk is classified high
    pub const HIGH_RISK_THRESHOLD: u32 = 8;

    /// Total points at or above which intake risk is classified medium
    pub const MEDIUM_RISK_THRESHOLD: u32 = 4;
}

/// Diurnal activity modulation for older adults
///
/// Reference: Huang, Y.L. et al. (2002). Age-associated difference in circadian
/// sleep-wake and rest-activity rhythms. Physiology & Behavior.
pub mod circadian {
    /// Relative activity level for morning observations
    pub const MORNING_ACTIVITY_FACTOR: f64 = 1.0;

    /// Relative activity level for afternoon observations
    pub const AFTERNOON_ACTIVITY_FACTOR: f64 = 0.95;

    /// Relative activity level for evening observations
    pub const EVENING_ACTIVITY_FACTOR: f64 = 0.9;

    /// Relative activity level for night observations
    pub const NIGHT_ACTIVITY_FACTOR: f64 = 0.8;
}

/// Medication effects on mobility
///
/// Reference: Woolcott, J.C. et al. (2009). Meta-analysis of the impact of 9
/// medication classes on falls in elderly persons. Archives of Internal
/// Medicine. https://pubmed.ncbi.nlm.nih.gov/19933955/
pub mod medication_effects {
    /// Activity and gait suppression while on a balance-affecting medication
    pub const BALANCE_MEDICATION_ACTIVITY_FACTOR: f64 = 0.9;
}

/// Prevalence figures for sensory, medication, and housing factors
///
/// References:
/// - National Eye Institute prevalence tables for adults 65+
/// - NIDCD hearing loss statistics, roughly one in four adults 65-74
/// - American Housing Survey stair prevalence in occupied units
pub mod prevalence {
    /// Probability an older adult has a clinically relevant vision impairment
    pub const VISION_IMPAIRMENT: f64 = 0.3;

    /// Probability an older adult has a clinically relevant hearing impairment
    pub const HEARING_IMPAIRMENT: f64 = 0.25;

    /// Probability a prescribed medication affects balance
    /// Reference: Woolcott (2009) medication class coverage
    pub const BALANCE_AFFECTING_MEDICATION: f64 = 0.3;

    /// Probability a home with stairs is missing handrails
    pub const MISSING_HANDRAILS: f64 = 0.3;

    /// Probability a home has stairs at all
    pub const STAIRS_PRESENT: f64 = 0.7;

    /// Age at which chronic-condition prevalence starts to accrue in the
    /// cohort model
    pub const CONDITION_ONSET_AGE: f64 = 60.0;

    /// Per-year increase in the per-condition draw probability past the
    /// onset age
    /// Reference: multimorbidity growth in Barnett (2012), The Lancet.
    pub const CONDITION_PREVALENCE_PER_YEAR: f64 = 0.01;
}
