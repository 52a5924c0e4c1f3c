use std::str::FromStr;

use pblite_filters::{
    dog_filter_bank_with, gabor_filter_bank_with, lm_filter_bank_with, FilterBank,
    FilterBankError, LmVariant,
};
use pblite_viz::{BankRenderer, RenderError};

use crate::config::FilterBankConfig;

/// Which banks to build.
///
/// Parsed case-insensitively from `all`, `dog`, `lm-small`, `lm-large` or
/// `gabor`; `lms` and `lml`, the LM bank names, are accepted as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BankSelection {
    /// DoG, LM small, LM large and Gabor, in that order.
    #[default]
    All,
    /// The derivative-of-Gaussian bank.
    Dog,
    /// The Leung-Malik bank with the small scale set.
    LmSmall,
    /// The Leung-Malik bank with the large scale set.
    LmLarge,
    /// The Gabor bank.
    Gabor,
}

impl FromStr for BankSelection {
    type Err = FilterBankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "dog" => Ok(Self::Dog),
            "lm-small" | "lms" => Ok(Self::LmSmall),
            "lm-large" | "lml" => Ok(Self::LmLarge),
            "gabor" => Ok(Self::Gabor),
            _ => Err(FilterBankError::UnknownBankType(s.to_string())),
        }
    }
}

impl BankSelection {
    fn includes(&self, other: BankSelection) -> bool {
        *self == BankSelection::All || *self == other
    }
}

/// Build the selected banks from the configuration.
///
/// The banks are returned in the order DoG, LM small, LM large, Gabor,
/// skipping the ones that are not selected.
///
/// # Example
///
/// ```
/// use pblite::config::FilterBankConfig;
/// use pblite::driver::{build_banks, BankSelection};
///
/// let banks = build_banks(&FilterBankConfig::default(), BankSelection::All).unwrap();
/// let names: Vec<_> = banks.iter().map(|b| b.name()).collect();
///
/// assert_eq!(names, ["DoG1", "LMs", "LMl", "Gabor"]);
/// ```
pub fn build_banks(
    config: &FilterBankConfig,
    selection: BankSelection,
) -> Result<Vec<FilterBank>, FilterBankError> {
    let mut banks = Vec::new();

    if selection.includes(BankSelection::Dog) {
        banks.push(dog_filter_bank_with(&config.dog)?);
    }
    if selection.includes(BankSelection::LmSmall) {
        banks.push(lm_filter_bank_with(LmVariant::Small, &config.lm)?);
    }
    if selection.includes(BankSelection::LmLarge) {
        banks.push(lm_filter_bank_with(LmVariant::Large, &config.lm)?);
    }
    if selection.includes(BankSelection::Gabor) {
        banks.push(gabor_filter_bank_with(&config.gabor)?);
    }

    Ok(banks)
}

/// Render every bank under its own name.
pub fn render_banks<R: BankRenderer + ?Sized>(
    renderer: &mut R,
    banks: &[FilterBank],
) -> Result<(), RenderError> {
    for bank in banks {
        renderer.render(bank, bank.name())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{build_banks, render_banks, BankSelection};
    use crate::config::FilterBankConfig;
    use pblite_filters::{FilterBank, FilterBankError};
    use pblite_viz::{BankRenderer, RenderError};

    #[derive(Default)]
    struct RecordingRenderer {
        rendered: Vec<(String, usize)>,
    }

    impl BankRenderer for RecordingRenderer {
        fn render(&mut self, bank: &FilterBank, name: &str) -> Result<(), RenderError> {
            self.rendered.push((name.to_string(), bank.len()));
            Ok(())
        }
    }

    #[test]
    fn selection_parsing() {
        assert_eq!("all".parse::<BankSelection>(), Ok(BankSelection::All));
        assert_eq!("LM-small".parse::<BankSelection>(), Ok(BankSelection::LmSmall));
        assert_eq!("lml".parse::<BankSelection>(), Ok(BankSelection::LmLarge));
        assert_eq!("LMs".parse::<BankSelection>(), Ok(BankSelection::LmSmall));
        assert_eq!(
            "texton".parse::<BankSelection>(),
            Err(FilterBankError::UnknownBankType("texton".to_string()))
        );
    }

    #[test]
    fn build_single_bank() -> Result<(), FilterBankError> {
        let banks = build_banks(&FilterBankConfig::default(), BankSelection::Gabor)?;
        assert_eq!(banks.len(), 1);
        assert_eq!(banks[0].len(), 40);
        Ok(())
    }

    #[test]
    fn render_all_banks_in_order() -> Result<(), Box<dyn std::error::Error>> {
        let banks = build_banks(&FilterBankConfig::default(), BankSelection::All)?;
        let mut renderer = RecordingRenderer::default();
        render_banks(&mut renderer, &banks)?;
        assert_eq!(
            renderer.rendered,
            vec![
                ("DoG1".to_string(), 32),
                ("LMs".to_string(), 48),
                ("LMl".to_string(), 48),
                ("Gabor".to_string(), 40),
            ]
        );
        Ok(())
    }

    #[test]
    fn invalid_config_surfaces_bank_error() {
        let mut config = FilterBankConfig::default();
        config.lm.size = 50;
        let err = build_banks(&config, BankSelection::LmSmall).unwrap_err();
        assert!(err.is_invalid_argument());
    }
}
