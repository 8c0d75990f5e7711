//! Prompt assembly.
//!
//! `assemble` is the pure core of mercato: it renders a brief into the final
//! Italian instruction text, ready to paste into a conversational AI tool.
//! It is total over the brief's field domains (empty free-text fields render
//! as the `n/d` placeholder), deterministic, and side-effect free. The whole
//! document is recomputed on every call; nothing is cached.

use crate::brief::{Brief, OutputFormat, Stage};

/// Substitute for any free-text field left empty.
pub const PLACEHOLDER: &str = "n/d";

/// Opening persona line, independent of the brief.
const PERSONA: &str =
    "Agisci come un consulente di strategia senior specializzato in analisi di mercato in Italia.";

/// Fixed method and quality requirements, always included.
const METHOD_BULLETS: [&str; 4] = [
    "- Cita fonti e ipotesi; evidenzia limiti dei dati.",
    "- Includi metriche (CAC, LTV, conversioni, churn) quando rilevanti.",
    "- Fornisci un piano in 30-60-90 giorni con milestone e KPI.",
    "- Evidenzia quick wins e rischi con mitigazioni.",
];

/// Render a brief into the final prompt text.
pub fn assemble(brief: &Brief) -> String {
    let context = format!(
        "Contesto aziendale: settore \"{}\"; mercato target \"{}\"; area geografica \"{}\"; \
         stadio \"{}\"; prodotti/servizi: {}; vantaggio competitivo: {}.",
        or_placeholder(&brief.industry),
        or_placeholder(&brief.target_market),
        or_placeholder(&brief.geography),
        stage_label(brief.stage),
        or_placeholder(&brief.products_services),
        or_placeholder(&brief.competitive_advantage),
    );

    let objective = format!(
        "Obiettivo dell'analisi: {}. Budget indicativo: {}. Orizzonte temporale: {}.",
        or_placeholder(&brief.objective),
        or_placeholder(&brief.budget),
        or_placeholder(&brief.timeframe),
    );

    let data = format!(
        "Dati disponibili: {}. Vincoli o restrizioni: {}. Fonti preferite/metodologie: {}.",
        or_placeholder(&brief.available_data),
        or_placeholder(&brief.constraints),
        or_placeholder(&brief.methodologies),
    );

    let focus_bullets = brief
        .focus
        .resolved()
        .iter()
        .map(|f| format!("- {}", f.instruction()))
        .collect::<Vec<_>>()
        .join("\n");

    let directive = format!("- {}", format_directive(brief.format));

    let closing = format!(
        "- Tono: {}. Dettaglio: {}. Lingua/e: {}.",
        brief.tone,
        brief.detail,
        or_placeholder(&brief.languages),
    );

    [
        PERSONA,
        context.as_str(),
        objective.as_str(),
        data.as_str(),
        "",
        "Consegna un output completo che includa:",
        focus_bullets.as_str(),
        "",
        "Requisiti di metodo e qualità:",
        METHOD_BULLETS[0],
        METHOD_BULLETS[1],
        METHOD_BULLETS[2],
        METHOD_BULLETS[3],
        directive.as_str(),
        "",
        "Formato finale richiesto:",
        closing.as_str(),
        "Inizia con una sintesi esecutiva (max 10 punti) e termina con un action plan.",
    ]
    .join("\n")
}

/// Empty or whitespace-only free text renders as the placeholder.
///
/// Applied independently at every interpolation site.
fn or_placeholder(value: &str) -> &str {
    if value.trim().is_empty() {
        PLACEHOLDER
    } else {
        value
    }
}

/// The unset stage renders as the placeholder, like empty free text.
fn stage_label(stage: Stage) -> &'static str {
    match stage {
        Stage::Unset => PLACEHOLDER,
        other => other.label(),
    }
}

/// Exactly one directive line, selected by the output format.
fn format_directive(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Tabella => "Usa tabelle per confronti/metriche; altrimenti bullet puntati.",
        OutputFormat::Bullet => "Usa bullet puntati compatti, con sezioni chiare.",
        OutputFormat::Report => "Scrivi come un report strutturato con sezioni e sottosezioni.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brief::{Detail, Tone};
    use crate::focus::{Focus, FocusSelection, FocusToken};

    const TABELLA_DIRECTIVE: &str =
        "- Usa tabelle per confronti/metriche; altrimenti bullet puntati.";
    const BULLET_DIRECTIVE: &str = "- Usa bullet puntati compatti, con sezioni chiare.";
    const REPORT_DIRECTIVE: &str =
        "- Scrivi come un report strutturato con sezioni e sottosezioni.";

    /// A brief with every free-text field blanked out.
    fn blank_brief() -> Brief {
        Brief {
            geography: String::new(),
            objective: String::new(),
            timeframe: String::new(),
            methodologies: String::new(),
            languages: String::new(),
            ..Brief::default()
        }
    }

    #[test]
    fn default_brief_assembles_to_non_empty_text() {
        let text = assemble(&Brief::default());
        assert!(!text.is_empty());
        assert!(text.starts_with(PERSONA));
    }

    #[test]
    fn empty_fields_render_as_placeholder_at_every_site() {
        let text = assemble(&blank_brief());
        assert!(text.contains("settore \"n/d\""));
        assert!(text.contains("mercato target \"n/d\""));
        assert!(text.contains("area geografica \"n/d\""));
        assert!(text.contains("stadio \"n/d\""));
        assert!(text.contains("prodotti/servizi: n/d"));
        assert!(text.contains("vantaggio competitivo: n/d"));
        assert!(text.contains("Obiettivo dell'analisi: n/d"));
        assert!(text.contains("Budget indicativo: n/d"));
        assert!(text.contains("Orizzonte temporale: n/d"));
        assert!(text.contains("Dati disponibili: n/d"));
        assert!(text.contains("Vincoli o restrizioni: n/d"));
        assert!(text.contains("Fonti preferite/metodologie: n/d"));
        assert!(text.contains("Lingua/e: n/d"));
    }

    #[test]
    fn whitespace_only_fields_also_fall_back() {
        let mut brief = Brief::default();
        brief.industry = "   ".to_string();
        let text = assemble(&brief);
        assert!(text.contains("settore \"n/d\""));
    }

    #[test]
    fn populated_fields_appear_verbatim() {
        let mut brief = Brief::default();
        brief.industry = "FoodTech".to_string();
        brief.budget = "50k-100k EUR".to_string();
        let text = assemble(&brief);
        assert!(text.contains("settore \"FoodTech\""));
        assert!(text.contains("Budget indicativo: 50k-100k EUR."));
    }

    #[test]
    fn sentinel_renders_all_ten_bullets_in_catalog_order() {
        let text = assemble(&Brief::default());
        let mut last = 0;
        for focus in Focus::ALL {
            let bullet = format!("- {}", focus.instruction());
            let pos = text.find(&bullet).expect("missing catalog bullet");
            assert!(pos >= last, "bullet out of catalog order");
            last = pos;
        }
    }

    #[test]
    fn explicit_full_selection_matches_sentinel_output() {
        let all = assemble(&Brief::default());

        let mut brief = Brief::default();
        brief.focus = FocusSelection::Chosen(Focus::ALL.into_iter().collect());
        assert_eq!(assemble(&brief), all);
    }

    #[test]
    fn bullets_follow_catalog_order_not_toggle_order() {
        let mut brief = Brief::default();
        // Pricing toggled before swot; swot precedes pricing in the catalog.
        brief.toggle_focus(FocusToken::Lens(Focus::Pricing));
        brief.toggle_focus(FocusToken::Lens(Focus::Swot));
        // Timestamps differ between toggles but must not affect the output.
        let text = assemble(&brief);

        let pricing = text.find(Focus::Pricing.instruction()).unwrap();
        let swot = text.find(Focus::Swot.instruction()).unwrap();
        assert!(pricing < swot);
        // No other lens leaks in.
        assert!(!text.contains(Focus::Trend.instruction()));
    }

    #[test]
    fn exactly_one_format_directive_appears() {
        for (format, expected) in [
            (OutputFormat::Report, REPORT_DIRECTIVE),
            (OutputFormat::Bullet, BULLET_DIRECTIVE),
            (OutputFormat::Tabella, TABELLA_DIRECTIVE),
        ] {
            let mut brief = Brief::default();
            brief.format = format;
            let text = assemble(&brief);

            let count = [REPORT_DIRECTIVE, BULLET_DIRECTIVE, TABELLA_DIRECTIVE]
                .iter()
                .filter(|d| text.contains(**d))
                .count();
            assert_eq!(count, 1, "exactly one directive for {:?}", format);
            assert!(text.contains(expected));
        }
    }

    #[test]
    fn method_bullets_are_always_present() {
        let text = assemble(&blank_brief());
        for bullet in METHOD_BULLETS {
            assert!(text.contains(bullet));
        }
    }

    #[test]
    fn assembly_is_idempotent() {
        let mut brief = Brief::default();
        brief.industry = "SaaS HR".to_string();
        assert_eq!(assemble(&brief), assemble(&brief));
    }

    #[test]
    fn document_sections_appear_in_fixed_order() {
        let text = assemble(&Brief::default());
        let persona = text.find(PERSONA).unwrap();
        let context = text.find("Contesto aziendale:").unwrap();
        let objective = text.find("Obiettivo dell'analisi:").unwrap();
        let data = text.find("Dati disponibili:").unwrap();
        let deliver = text.find("Consegna un output completo che includa:").unwrap();
        let method = text.find("Requisiti di metodo e qualità:").unwrap();
        let closing = text.find("Formato finale richiesto:").unwrap();
        let summary = text
            .find("Inizia con una sintesi esecutiva (max 10 punti) e termina con un action plan.")
            .unwrap();
        assert!(persona < context);
        assert!(context < objective);
        assert!(objective < data);
        assert!(data < deliver);
        assert!(deliver < method);
        assert!(method < closing);
        assert!(closing < summary);
    }

    #[test]
    fn blank_lines_separate_major_groups() {
        let text = assemble(&Brief::default());
        assert!(text.contains(".\n\nConsegna un output completo che includa:"));
        assert!(text.contains(".\n\nRequisiti di metodo e qualità:"));
        assert!(text.contains(".\n\nFormato finale richiesto:"));
        // Single trailing line, no trailing newline.
        assert!(text.ends_with("termina con un action plan."));
    }

    // The end-to-end scenario: a seed-less SaaS brief with everything else
    // left empty, full focus, report format.
    #[test]
    fn saas_hr_scenario() {
        let mut brief = blank_brief();
        brief.industry = "SaaS HR".to_string();
        brief.target_market = "PMI".to_string();
        brief.geography = "Italia".to_string();
        brief.stage = Stage::Unset;
        brief.tone = Tone::Consulenziale;
        brief.detail = Detail::Approfondito;
        brief.format = OutputFormat::Report;
        brief.focus = FocusSelection::All;

        let text = assemble(&brief);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], PERSONA);
        assert_eq!(
            lines[1],
            "Contesto aziendale: settore \"SaaS HR\"; mercato target \"PMI\"; \
             area geografica \"Italia\"; stadio \"n/d\"; prodotti/servizi: n/d; \
             vantaggio competitivo: n/d."
        );
        for focus in Focus::ALL {
            assert!(text.contains(focus.instruction()));
        }
        assert!(text.contains(REPORT_DIRECTIVE));
        assert!(text.contains("- Tono: consulenziale. Dettaglio: approfondito. Lingua/e: n/d."));
        assert!(text.ends_with(
            "Inizia con una sintesi esecutiva (max 10 punti) e termina con un action plan."
        ));
    }
}
