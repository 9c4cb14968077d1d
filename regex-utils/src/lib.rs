//! Regex utilities for cursogen
//! Extracted to a separate crate for compilation optimization

use once_cell::sync::Lazy;
use regex::Regex;

/// Compiled patterns for the numbered headings of the course-registration form
pub mod form {
    use super::*;

    /// One recognizable form field: canonical key plus its heading pattern.
    pub struct FieldPattern {
        pub key: &'static str,
        pub pattern: Regex,
        /// Comma-separated fields are split into lists downstream
        pub comma_list: bool,
    }

    /// Builds the heading pattern for a numbered field: `### <n> <label>`,
    /// flexible whitespace, capturing the line that follows. Trailing spaces
    /// and blank lines after the heading are tolerated.
    fn heading(numeral: u32, label: &str) -> Regex {
        let source = format!(r"(?is)###\s*{numeral}\s*{label}\s*\n(.*?)(?:\n|\z)");
        Regex::new(&source).expect("Invalid regex pattern")
    }

    fn field(key: &'static str, numeral: u32, label: &str, comma_list: bool) -> FieldPattern {
        FieldPattern { key, pattern: heading(numeral, label), comma_list }
    }

    /// All recognized form fields, in form order.
    pub static FIELDS: Lazy<Vec<FieldPattern>> = Lazy::new(|| {
        vec![
            field("codigo_nome", 1, r"Código\s*e\s*nome\s*da\s*disciplina", false),
            field("natureza", 2, r"Natureza", false),
            field("carga_horaria_semestral", 3, r"Carga\s*horária\s*semestral", false),
            field("carga_horaria_semanal", 4, r"Carga\s*horária\s*semanal", false),
            field("perfil_docente", 5, r"Perfil\s*(?:do\s*)?docente", false),
            field("area_tematica", 6, r"Área\s*temática", false),
            field(
                "linha_eixo_extensao_pesquisa",
                7,
                r"Linha\s*/?\s*eixo\s*de\s*extensão\s*e\s*pesquisa",
                false,
            ),
            field("competencias", 8, r"Competências", true),
            field("ementa", 9, r"Ementa", true),
            field("objetivos", 10, r"Objetivos", true),
            field(
                "objetivos_sociocomunitarios",
                11,
                r"Objetivos\s*sociocomunitários",
                true,
            ),
            field(
                "descricao_publico",
                12,
                r"Descrição\s*do\s*público(?:\s*envolvido)?",
                false,
            ),
            field("justificativa", 13, r"Justificativa", false),
            field(
                "procedimentos_ensino",
                14,
                r"Procedimentos\s*de\s*ensino[-\s]*aprendizagem",
                true,
            ),
            field("temas_aprendizagem", 15, r"Temas\s*de\s*aprendizagem", true),
            field(
                "procedimentos_avaliacao",
                16,
                r"Procedimentos\s*de\s*avaliação",
                true,
            ),
            field("bibliografia_basica", 17, r"Bibliografia\s*básica", true),
            field(
                "bibliografia_complementar",
                18,
                r"Bibliografia\s*complementar",
                true,
            ),
            field("data_inicio", 19, r"Data\s*de\s*início", false),
        ]
    });

    /// Capture the value line for one field, trimmed
    pub fn capture(field: &FieldPattern, text: &str) -> Option<String> {
        field
            .pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
    }
}

/// Compiled patterns for teaching-plan outlines
pub mod plan {
    use super::*;

    /// Top-level module heading: `### <n> <title>`
    pub static MODULE_HEADING: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(?is)###\s*(\d+)\s*(.*?)(?:\n|\z)").expect("Invalid regex pattern")
    });

    /// Sub-numbered topic line: `<int>.<int> <title>`
    pub static TOPIC_LINE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(?i)\d+\.\d+\s*(.*?)(?:\n|\z)").expect("Invalid regex pattern")
    });

    /// Extract topic titles from a module block body, in document order
    pub fn topics(body: &str) -> Vec<String> {
        TOPIC_LINE
            .captures_iter(body)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codigo_nome_capture() {
        let text = "### 1 Código e nome da disciplina\nIntro to Testing\n";
        let field = &form::FIELDS[0];
        assert_eq!(field.key, "codigo_nome");
        assert_eq!(form::capture(field, text), Some("Intro to Testing".to_string()));
    }

    #[test]
    fn test_capture_is_case_insensitive() {
        let text = "### 6 ÁREA TEMÁTICA\nComputação\n";
        let field = form::FIELDS.iter().find(|f| f.key == "area_tematica").unwrap();
        assert_eq!(form::capture(field, text), Some("Computação".to_string()));
    }

    #[test]
    fn test_capture_tolerates_missing_trailing_newline() {
        let text = "### 19 Data de início\n2024-07-16";
        let field = form::FIELDS.iter().find(|f| f.key == "data_inicio").unwrap();
        assert_eq!(form::capture(field, text), Some("2024-07-16".to_string()));
    }

    #[test]
    fn test_absent_field_is_none() {
        let field = &form::FIELDS[0];
        assert_eq!(form::capture(field, "nothing relevant here\n"), None);
    }

    #[test]
    fn test_module_heading_captures_numeral_and_title() {
        let caps = plan::MODULE_HEADING.captures("### 2 Module Two\n").unwrap();
        assert_eq!(&caps[1], "2");
        assert_eq!(caps[2].trim(), "Module Two");
    }

    #[test]
    fn test_topic_lines_in_order() {
        let body = "1.1 Topic A\n1.2 Topic B\n";
        assert_eq!(plan::topics(body), vec!["Topic A", "Topic B"]);
    }

    #[test]
    fn test_body_without_topic_lines_is_empty() {
        assert!(plan::topics("prose paragraph with no numbering\n").is_empty());
    }
}
