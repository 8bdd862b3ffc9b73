use serde::Serialize;

use super::likelihood::RiskEstimate;

/// Inputs every event condition is judged against.
#[derive(Debug, Clone, Copy)]
pub struct EventInputs {
    pub risk: RiskEstimate,
    pub avg_temp_c: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Condition {
    RainAbove(f64),
    WindAbove(f64),
    TempAbove(f64),
    TempBelow(f64),
}

impl Condition {
    pub fn holds(&self, inputs: &EventInputs) -> bool {
        match *self {
            Condition::RainAbove(limit) => inputs.risk.rain > limit,
            Condition::WindAbove(limit) => inputs.risk.wind > limit,
            Condition::TempAbove(limit) => inputs.avg_temp_c > limit,
            Condition::TempBelow(limit) => inputs.avg_temp_c < limit,
        }
    }
}

/// Flat score deduction applied when the condition holds.
#[derive(Debug, Clone, Copy)]
pub struct Penalty {
    pub when: Condition,
    pub points: f64,
}

/// Reason reported when the condition holds. The first matching caution wins.
#[derive(Debug, Clone, Copy)]
pub struct Caution {
    pub when: Condition,
    pub message: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct EventProfile {
    pub name: &'static str,
    pub icon: &'static str,
    pub rain_weight: f64,
    pub wind_weight: f64,
    pub penalties: &'static [Penalty],
    /// Suitable when the score is strictly above this
    pub threshold: f64,
    pub cautions: &'static [Caution],
    pub favourable: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub name: String,
    pub suitable: bool,
    pub reason: String,
    pub icon: String,
}

/// Emission order is part of the response contract.
pub const EVENT_CATALOG: &[EventProfile] = &[
    EventProfile {
        name: "Outdoor Concert/Festival",
        icon: "🎵",
        rain_weight: 0.7,
        wind_weight: 0.3,
        penalties: &[],
        threshold: 60.0,
        cautions: &[
            Caution { when: Condition::RainAbove(40.0), message: "High chance of rain" },
            Caution { when: Condition::WindAbove(50.0), message: "Strong winds expected" },
        ],
        favourable: "Good weather conditions",
    },
    EventProfile {
        name: "Hiking/Trekking",
        icon: "🥾",
        rain_weight: 0.5,
        wind_weight: 0.3,
        penalties: &[
            Penalty { when: Condition::TempAbove(35.0), points: 50.0 },
            Penalty { when: Condition::TempBelow(5.0), points: 50.0 },
        ],
        threshold: 50.0,
        cautions: &[
            Caution { when: Condition::RainAbove(40.0), message: "Rain makes trails slippery" },
            Caution { when: Condition::TempAbove(35.0), message: "Too hot for hiking" },
            Caution { when: Condition::TempBelow(5.0), message: "Too cold for outdoor activity" },
        ],
        favourable: "Perfect hiking conditions",
    },
    EventProfile {
        name: "Outdoor Sports",
        icon: "⚽",
        rain_weight: 0.8,
        wind_weight: 0.2,
        penalties: &[],
        threshold: 65.0,
        cautions: &[
            Caution { when: Condition::RainAbove(35.0), message: "Rain will affect gameplay" },
            Caution { when: Condition::WindAbove(60.0), message: "High winds may interfere" },
        ],
        favourable: "Good conditions for sports",
    },
    EventProfile {
        name: "Beach Day",
        icon: "🏖️",
        rain_weight: 0.6,
        wind_weight: 0.2,
        penalties: &[Penalty { when: Condition::TempBelow(20.0), points: 40.0 }],
        threshold: 60.0,
        cautions: &[
            Caution { when: Condition::RainAbove(30.0), message: "Rainy weather expected" },
            Caution { when: Condition::TempBelow(20.0), message: "Too cold for beach" },
            Caution { when: Condition::WindAbove(50.0), message: "Windy conditions" },
        ],
        favourable: "Perfect beach weather",
    },
    EventProfile {
        name: "Picnic",
        icon: "🧺",
        rain_weight: 0.9,
        wind_weight: 0.4,
        penalties: &[],
        threshold: 55.0,
        cautions: &[
            Caution { when: Condition::RainAbove(25.0), message: "Rain likely to interrupt" },
            Caution { when: Condition::WindAbove(55.0), message: "Too windy" },
        ],
        favourable: "Ideal for outdoor dining",
    },
    EventProfile {
        name: "Outdoor Wedding",
        icon: "💒",
        rain_weight: 0.95,
        wind_weight: 0.3,
        penalties: &[],
        threshold: 70.0,
        cautions: &[
            Caution { when: Condition::RainAbove(20.0), message: "Rain risk too high" },
            Caution { when: Condition::WindAbove(50.0), message: "Wind may cause issues" },
        ],
        favourable: "Beautiful weather for ceremony",
    },
    EventProfile {
        name: "Camping",
        icon: "⛺",
        rain_weight: 0.7,
        wind_weight: 0.5,
        penalties: &[Penalty { when: Condition::TempBelow(0.0), points: 60.0 }],
        threshold: 50.0,
        cautions: &[
            Caution { when: Condition::RainAbove(40.0), message: "Rain makes camping difficult" },
            Caution { when: Condition::WindAbove(60.0), message: "Strong winds unsafe for tents" },
            Caution { when: Condition::TempBelow(0.0), message: "Freezing temperatures" },
        ],
        favourable: "Great camping weather",
    },
    EventProfile {
        name: "Cycling",
        icon: "🚴",
        rain_weight: 0.6,
        wind_weight: 0.4,
        penalties: &[],
        threshold: 60.0,
        cautions: &[
            Caution { when: Condition::RainAbove(35.0), message: "Wet roads dangerous" },
            Caution { when: Condition::WindAbove(55.0), message: "Strong headwinds" },
        ],
        favourable: "Good cycling conditions",
    },
];

impl EventProfile {
    /// 100 minus weighted rain and wind risk minus any temperature penalties.
    pub fn score(&self, inputs: &EventInputs) -> f64 {
        let penalty: f64 = self
            .penalties
            .iter()
            .filter(|p| p.when.holds(inputs))
            .map(|p| p.points)
            .sum();

        100.0 - (inputs.risk.rain * self.rain_weight + inputs.risk.wind * self.wind_weight + penalty)
    }

    pub fn reason(&self, inputs: &EventInputs) -> &'static str {
        self.cautions
            .iter()
            .find(|c| c.when.holds(inputs))
            .map(|c| c.message)
            .unwrap_or(self.favourable)
    }

    pub fn evaluate(&self, inputs: &EventInputs) -> Recommendation {
        Recommendation {
            name: self.name.to_string(),
            suitable: self.score(inputs) > self.threshold,
            reason: self.reason(inputs).to_string(),
            icon: self.icon.to_string(),
        }
    }
}

/// Judge every catalog event, in catalog order. Empty for historical queries.
pub fn recommend(risk: &RiskEstimate, avg_temp_c: f64, is_future: bool) -> Vec<Recommendation> {
    if !is_future {
        return Vec::new();
    }

    let inputs = EventInputs {
        risk: *risk,
        avg_temp_c,
    };
    EVENT_CATALOG.iter().map(|event| event.evaluate(&inputs)).collect()
}
