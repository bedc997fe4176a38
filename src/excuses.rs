use crate::errors::AppError;
use crate::models::{GenerateRequest, Intensity};

pub const MIN_DURATION_MINUTES: u32 = 1;
pub const MAX_DURATION_MINUTES: u32 = 180;

const EXCUSES: &[(&str, &[&str])] = &[
    (
        "running",
        &[
            "my shoes are having an existential crisis",
            "I saw a weather forecast from a parallel universe where it's raining",
            "I'm saving my energy for professional couch surfing",
        ],
    ),
    (
        "weightlifting",
        &[
            "the weights looked at me funny",
            "my muscles are on a meditation retreat",
            "gravity is particularly strong today",
        ],
    ),
    (
        "yoga",
        &[
            "my chakras are already perfectly aligned... probably",
            "my yoga mat is practicing social distancing",
            "my zen is at maximum capacity",
        ],
    ),
    (
        "swimming",
        &[
            "the water molecules requested a day off",
            "my swimsuit is attending a fashion show",
            "I'm allergic to chlorine today only",
        ],
    ),
    (
        "cycling",
        &[
            "my bike is having a quarter-life crisis",
            "the wind is too aerodynamic today",
            "my pedals are practicing mindfulness",
        ],
    ),
    (
        "HIIT",
        &[
            "my intervals need a interval",
            "my high intensity is feeling rather low",
            "my burpees have burped their last",
        ],
    ),
];

const COUNTER_MOTIVATIONS: &[&str] = &[
    "those endorphins won't release themselves",
    "your future self is sending eye rolls from tomorrow",
    "your workout playlist is feeling neglected",
    "that post-workout glow doesn't come from Netflix",
    "your muscles are plotting their revenge",
    "the gym misses your awkward selfies",
];

#[derive(Debug, Clone)]
pub struct ValidatedRequest {
    pub workout_type: String,
    pub duration: u32,
    pub intensity: Intensity,
}

pub fn workout_types() -> Vec<&'static str> {
    EXCUSES.iter().map(|(workout, _)| *workout).collect()
}

fn excuses_for(workout_type: &str) -> Option<&'static [&'static str]> {
    EXCUSES
        .iter()
        .find(|(workout, _)| *workout == workout_type)
        .map(|(_, excuses)| *excuses)
}

pub fn validate(request: GenerateRequest) -> Result<ValidatedRequest, AppError> {
    let workout_type = match request.workout_type {
        Some(workout) if excuses_for(&workout).is_some() => workout,
        _ => return Err(AppError::bad_request("Invalid workout type")),
    };

    let duration = match request.duration {
        Some(minutes) if (MIN_DURATION_MINUTES..=MAX_DURATION_MINUTES).contains(&minutes) => {
            minutes
        }
        _ => {
            return Err(AppError::bad_request(
                "Duration must be between 1 and 180 minutes",
            ))
        }
    };

    let intensity = request
        .intensity
        .as_deref()
        .and_then(Intensity::parse)
        .ok_or_else(|| AppError::bad_request("Invalid intensity level"))?;

    Ok(ValidatedRequest {
        workout_type,
        duration,
        intensity,
    })
}

/// Formats a full excuse and counter-motivation for a validated request,
/// picking randomly from the static tables.
pub fn generate(request: &ValidatedRequest) -> Result<(String, String), AppError> {
    let excuses = excuses_for(&request.workout_type)
        .ok_or_else(|| AppError::bad_request("Invalid workout type"))?;
    let excuse = pick(excuses)?;
    let counter_motivation = pick(COUNTER_MOTIVATIONS)?;

    Ok((
        format!("I can't do {} today because {excuse}", request.workout_type),
        format!("But remember: {counter_motivation}"),
    ))
}

fn pick<'a>(items: &'a [&'a str]) -> Result<&'a str, AppError> {
    let mut buf = [0u8; 4];
    getrandom::fill(&mut buf).map_err(AppError::internal)?;
    let index = u32::from_le_bytes(buf) as usize % items.len();
    Ok(items[index])
}
