use std::str::FromStr;

use anyhow::{anyhow, ensure, Context, Result};

/// Declares a settings choice enum with its form value and label.
macro_rules! choice {
    ($name:ident { $($variant:ident => ($value:literal, $label:literal)),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn value(&self) -> &'static str {
                match self {
                    $($name::$variant => $value),+
                }
            }

            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl FromStr for $name {
            type Err = anyhow::Error;

            fn from_str(s: &str) -> Result<$name> {
                $name::ALL
                    .iter()
                    .find(|choice| choice.value() == s)
                    .copied()
                    .ok_or_else(|| anyhow!("Unknown {}: {}", stringify!($name), s))
            }
        }
    };
}

choice!(Language {
    English => ("en", "English"),
    Spanish => ("es", "Spanish"),
    French => ("fr", "French"),
    German => ("de", "German"),
});

choice!(TimeZone {
    Utc => ("utc", "UTC"),
    Est => ("est", "EST"),
    Pst => ("pst", "PST"),
    Gmt => ("gmt", "GMT"),
});

choice!(Model {
    Gpt4 => ("gpt-4", "GPT-4"),
    Claude3 => ("claude-3", "Claude 3"),
    Gpt35 => ("gpt-3.5", "GPT-3.5"),
    Llama2 => ("llama-2", "Llama 2"),
});

choice!(Theme {
    Light => ("light", "Light"),
    Dark => ("dark", "Dark"),
    System => ("system", "System"),
});

choice!(FontSize {
    Small => ("small", "Small"),
    Medium => ("medium", "Medium"),
    Large => ("large", "Large"),
});

pub const TEMPERATURE_RANGE: (f32, f32) = (0.0, 1.0);
pub const MAX_TOKENS_RANGE: (u32, u32) = (100, 4000);

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub language: Language,
    pub time_zone: TimeZone,
    pub auto_save: bool,

    pub default_model: Model,
    pub temperature: f32,
    pub max_tokens: u32,
    pub openai_api_key: String,
    pub anthropic_api_key: String,

    pub theme: Theme,
    pub font_size: FontSize,
    pub compact_mode: bool,

    pub email_notifications: bool,
    pub in_app_notifications: bool,
    pub model_updates: bool,
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            language: Language::English,
            time_zone: TimeZone::Utc,
            auto_save: true,
            default_model: Model::Gpt4,
            temperature: 0.7,
            max_tokens: 2000,
            openai_api_key: String::new(),
            anthropic_api_key: String::new(),
            theme: Theme::System,
            font_size: FontSize::Medium,
            compact_mode: false,
            email_notifications: true,
            in_app_notifications: true,
            model_updates: true,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<()> {
        let (lo, hi) = TEMPERATURE_RANGE;
        ensure!(
            (lo..=hi).contains(&self.temperature),
            "Temperature must be between {} and {}",
            lo,
            hi
        );
        let (lo, hi) = MAX_TOKENS_RANGE;
        ensure!(
            (lo..=hi).contains(&self.max_tokens),
            "Max tokens must be between {} and {}",
            lo,
            hi
        );
        Ok(())
    }
}

/// Raw text of the numeric inputs, kept apart so a half-typed value does not
/// clobber the typed settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericDraft {
    pub temperature: String,
    pub max_tokens: String,
}

impl NumericDraft {
    pub fn from_settings(settings: &Settings) -> NumericDraft {
        NumericDraft {
            temperature: settings.temperature.to_string(),
            max_tokens: settings.max_tokens.to_string(),
        }
    }

    /// Applies the numeric text to `draft` and validates the result.
    pub fn apply(&self, draft: &Settings) -> Result<Settings> {
        let mut settings = draft.clone();
        settings.temperature = self
            .temperature
            .trim()
            .parse()
            .context("Temperature must be a number")?;
        settings.max_tokens = self
            .max_tokens
            .trim()
            .parse()
            .context("Max tokens must be a whole number")?;
        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.language, Language::English);
        assert_eq!(settings.time_zone, TimeZone::Utc);
        assert_eq!(settings.default_model, Model::Gpt4);
        assert_eq!(settings.theme, Theme::System);
        assert_eq!(settings.font_size, FontSize::Medium);
        assert!(settings.auto_save);
        assert!(!settings.compact_mode);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_choice_parse() {
        assert_eq!("claude-3".parse::<Model>().unwrap(), Model::Claude3);
        assert_eq!("de".parse::<Language>().unwrap(), Language::German);
        assert_eq!(Theme::Dark.label(), "Dark");
        assert!("klingon".parse::<Language>().is_err());
        for model in Model::ALL {
            assert_eq!(model.value().parse::<Model>().unwrap(), *model);
        }
    }

    #[test]
    fn test_numeric_draft_apply() {
        let base = Settings::default();
        let draft = NumericDraft {
            temperature: " 0.2 ".into(),
            max_tokens: "4000".into(),
        };
        let saved = draft.apply(&base).unwrap();
        assert_eq!(saved.temperature, 0.2);
        assert_eq!(saved.max_tokens, 4000);
    }

    #[test]
    fn test_numeric_draft_rejects() {
        let base = Settings::default();
        let bad = [("1.5", "2000"), ("0.5", "50"), ("warm", "2000"), ("0.5", "2.5")];
        for (temperature, max_tokens) in bad {
            let draft = NumericDraft {
                temperature: temperature.into(),
                max_tokens: max_tokens.into(),
            };
            assert!(draft.apply(&base).is_err(), "{temperature} {max_tokens}");
        }
    }

    #[test]
    fn test_round_trip_defaults() {
        let base = Settings::default();
        let draft = NumericDraft::from_settings(&base);
        assert_eq!(draft.apply(&base).unwrap(), base);
    }
}
