//! Teaching-plan outline parsing

use regex_utils::plan;
use tracing::debug;

use crate::model::{Modulo, NucleoConceitual};

/// Segment plan text into module blocks delimited by top-level numbered
/// headings, then collect the sub-numbered topic lines inside each block.
/// Modules and topics keep document order; nesting is exactly two levels.
/// Text with no recognizable headings yields an empty outline.
pub fn extract_modulos(text: &str) -> Vec<Modulo> {
    let headings: Vec<(usize, usize, String)> = plan::MODULE_HEADING
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let titulo = caps.get(2)?.as_str().trim().to_string();
            Some((whole.start(), whole.end(), titulo))
        })
        .collect();

    let mut modulos = Vec::with_capacity(headings.len());
    for (idx, (_, body_start, titulo)) in headings.iter().enumerate() {
        let body_end = headings.get(idx + 1).map(|next| next.0).unwrap_or(text.len());
        let body = &text[*body_start..body_end];

        let mut modulo = Modulo::new(titulo.clone());
        modulo.nucleos_conceituais =
            plan::topics(body).into_iter().map(NucleoConceitual::new).collect();
        modulos.push(modulo);
    }

    debug!("Parsed {} modules from plan text", modulos.len());
    modulos
}
