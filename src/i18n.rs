use crate::data::filter::FilterError;
use crate::data::loader::DataLoadError;

// ---------------------------------------------------------------------------
// Language
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    French,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::French];

    /// Parse a language tag such as `en`, `fr-FR` or `Français`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim().to_lowercase();
        let primary = tag.split(['-', '_']).next().unwrap_or("");
        match primary {
            "en" | "english" => Some(Language::English),
            "fr" | "french" | "français" | "francais" => Some(Language::French),
            _ => None,
        }
    }

    /// Name shown in the language picker.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::French => "Français",
        }
    }
}

/// Shared by both languages.
pub const LANGUAGE_PICKER: &str = "🌐 Choose language / Choisissez la langue";

// ---------------------------------------------------------------------------
// Static label tables
// ---------------------------------------------------------------------------

/// Every user-visible string of the dashboard for one language.
#[derive(Debug)]
pub struct Labels {
    pub page_title: &'static str,
    pub subtitle: &'static str,
    pub sidebar_hint: &'static str,
    pub indicator_label: &'static str,
    pub year_label: &'static str,
    pub year_from: &'static str,
    pub year_to: &'static str,
    pub select_all: &'static str,
    pub select_none: &'static str,
    pub chart_title: &'static str,
    pub axis_year: &'static str,
    pub axis_growth: &'static str,
    pub summary_title: &'static str,
    pub col_indicator: &'static str,
    pub col_mean: &'static str,
    pub col_max: &'static str,
    pub col_min: &'static str,
    pub footer: &'static str,
    pub menu_file: &'static str,
    pub menu_open: &'static str,
    pub menu_reload: &'static str,
    pub rows_visible: &'static str,
    pub no_selection: &'static str,
    pub invalid_range: &'static str,
    pub no_rows: &'static str,
    pub empty_dataset: &'static str,
    pub error_not_found: &'static str,
    pub error_empty: &'static str,
    pub error_missing_columns: &'static str,
    pub error_malformed: &'static str,
    pub error_generic: &'static str,
}

pub static ENGLISH: Labels = Labels {
    page_title: "Morocco Macro Tracker",
    subtitle: "Track economic growth indicators in Morocco over the years.",
    sidebar_hint: "👈 Use the sidebar to select indicators and filter by year.",
    indicator_label: "Select Indicators",
    year_label: "Select Year Range",
    year_from: "From",
    year_to: "To",
    select_all: "All",
    select_none: "None",
    chart_title: "Growth Rate Over Time",
    axis_year: "Year",
    axis_growth: "Growth Rate",
    summary_title: "📊 Summary Statistics",
    col_indicator: "Indicator",
    col_mean: "Mean",
    col_max: "Max",
    col_min: "Min",
    footer: "Built with ❤ by Zaineb · Student in Master's in AI & Data Science",
    menu_file: "File",
    menu_open: "Open…",
    menu_reload: "Reload",
    rows_visible: "rows shown",
    no_selection: "⚠ Please select at least one indicator from the sidebar to display the chart.",
    invalid_range: "⚠ The start year must not be after the end year.",
    no_rows: "No data for the current selection.",
    empty_dataset: "The data file has a header but no rows.",
    error_not_found: "❌ Error: data file not found. Please ensure the data file is in the same directory as the application.",
    error_empty: "❌ Error: The data file is empty.",
    error_missing_columns: "❌ Error: the data file is missing required columns:",
    error_malformed: "❌ Error: the data file contains an invalid value:",
    error_generic: "❌ Error loading data:",
};

pub static FRENCH: Labels = Labels {
    page_title: "Tableau de bord économique du Maroc",
    subtitle: "Suivez les indicateurs de croissance économique du Maroc au fil des années.",
    sidebar_hint: "👈 Utilisez la barre latérale pour sélectionner les indicateurs et filtrer par année.",
    indicator_label: "Sélectionnez les indicateurs",
    year_label: "Sélectionnez la plage d'années",
    year_from: "De",
    year_to: "À",
    select_all: "Tous",
    select_none: "Aucun",
    chart_title: "Taux de croissance au fil du temps",
    axis_year: "Année",
    axis_growth: "Taux de croissance",
    summary_title: "📊 Statistiques Résumées",
    col_indicator: "Indicateur",
    col_mean: "Moyenne",
    col_max: "Max",
    col_min: "Min",
    footer: "Développé avec ❤ par Zaineb · Etudiante en Master en IA et Data Science",
    menu_file: "Fichier",
    menu_open: "Ouvrir…",
    menu_reload: "Recharger",
    rows_visible: "lignes affichées",
    no_selection: "⚠ Veuillez sélectionner au moins un indicateur dans la barre latérale pour afficher le graphique.",
    invalid_range: "⚠ L'année de début ne doit pas être postérieure à l'année de fin.",
    no_rows: "Aucune donnée pour la sélection actuelle.",
    empty_dataset: "Le fichier de données contient un en-tête mais aucune ligne.",
    error_not_found: "❌ Erreur : fichier de données introuvable. Vérifiez qu'il se trouve dans le même dossier que l'application.",
    error_empty: "❌ Erreur : le fichier de données est vide.",
    error_missing_columns: "❌ Erreur : colonnes obligatoires manquantes dans le fichier de données :",
    error_malformed: "❌ Erreur : valeur invalide dans le fichier de données :",
    error_generic: "❌ Erreur lors du chargement des données :",
};

/// Look up the label table for a language.
pub fn labels(language: Language) -> &'static Labels {
    match language {
        Language::English => &ENGLISH,
        Language::French => &FRENCH,
    }
}

impl Labels {
    /// User-facing message for a load failure.
    pub fn load_error(&self, err: &DataLoadError) -> String {
        match err {
            DataLoadError::NotFound { path } => {
                format!("{} ({})", self.error_not_found, path.display())
            }
            DataLoadError::Empty { .. } => self.error_empty.to_string(),
            DataLoadError::MissingColumns { columns, .. } => {
                format!("{} {}", self.error_missing_columns, columns.join(", "))
            }
            DataLoadError::Malformed { line, reason, .. } => {
                format!("{} {reason} (line {line})", self.error_malformed)
            }
            DataLoadError::Io { source, .. } => {
                format!("{} {err}: {source}", self.error_generic)
            }
            DataLoadError::Csv { source, .. } => {
                format!("{} {err}: {source}", self.error_generic)
            }
        }
    }

    /// User-facing message for a selection the pipeline rejected.
    pub fn filter_error(&self, err: &FilterError) -> String {
        match err {
            FilterError::NoSelection => self.no_selection.to_string(),
            FilterError::InvalidRange { min, max } => {
                format!("{} ({min} > {max})", self.invalid_range)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_language_from_tag() {
        assert_eq!(Language::from_tag("en"), Some(Language::English));
        assert_eq!(Language::from_tag("fr-FR"), Some(Language::French));
        assert_eq!(Language::from_tag(" Français "), Some(Language::French));
        assert_eq!(Language::from_tag("de"), None);
    }

    #[test]
    fn test_tables_differ_per_language() {
        let en = labels(Language::English);
        let fr = labels(Language::French);
        assert_eq!(en.chart_title, "Growth Rate Over Time");
        assert_eq!(fr.chart_title, "Taux de croissance au fil du temps");
        assert_ne!(en.summary_title, fr.summary_title);
    }

    #[test]
    fn test_load_error_messages() {
        let en = labels(Language::English);
        let msg = en.load_error(&DataLoadError::MissingColumns {
            path: PathBuf::from("data.csv"),
            columns: vec!["Year".to_string()],
        });
        assert!(msg.ends_with("Year"));

        let msg = labels(Language::French).load_error(&DataLoadError::Empty {
            path: PathBuf::from("data.csv"),
        });
        assert_eq!(msg, FRENCH.error_empty);
    }

    #[test]
    fn test_filter_error_messages() {
        let en = labels(Language::English);
        assert_eq!(en.filter_error(&FilterError::NoSelection), en.no_selection);
        assert!(en
            .filter_error(&FilterError::InvalidRange { min: 2022, max: 2020 })
            .contains("2022 > 2020"));
    }
}
