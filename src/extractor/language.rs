//! Statistical language detection.
//!
//! Detection failure (text too short, no letters, or an unreliable guess)
//! resolves to [`UNKNOWN_LANGUAGE`]; it is never an error.

use whatlang::Lang;

/// Sentinel for "language could not be determined".
pub const UNKNOWN_LANGUAGE: &str = "unknown";

/// Detect the language of `text`.
///
/// Returns an ISO 639-1 code where one exists, otherwise the ISO 639-3
/// code reported by the detector. `None` when detection fails or the
/// detector does not consider its guess reliable.
#[must_use]
pub fn detect(text: &str) -> Option<String> {
    let info = whatlang::detect(text)?;
    if !info.is_reliable() {
        return None;
    }
    Some(iso_639_1(info.lang()).map_or_else(|| info.lang().code().to_string(), str::to_string))
}

/// [`detect`], with failure mapped to `"unknown"`.
#[must_use]
pub fn detect_or_unknown(text: &str) -> String {
    detect(text).unwrap_or_else(|| UNKNOWN_LANGUAGE.to_string())
}

fn iso_639_1(lang: Lang) -> Option<&'static str> {
    let code = match lang {
        Lang::Eng => "en",
        Lang::Spa => "es",
        Lang::Fra => "fr",
        Lang::Deu => "de",
        Lang::Ita => "it",
        Lang::Por => "pt",
        Lang::Nld => "nl",
        Lang::Rus => "ru",
        Lang::Ukr => "uk",
        Lang::Pol => "pl",
        Lang::Tur => "tr",
        Lang::Ara => "ar",
        Lang::Hin => "hi",
        Lang::Ben => "bn",
        Lang::Urd => "ur",
        Lang::Cmn => "zh",
        Lang::Jpn => "ja",
        Lang::Kor => "ko",
        Lang::Vie => "vi",
        Lang::Ind => "id",
        Lang::Swe => "sv",
        Lang::Dan => "da",
        Lang::Fin => "fi",
        Lang::Ell => "el",
        Lang::Heb => "he",
        _ => return None,
    };
    Some(code)
}
