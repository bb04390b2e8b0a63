use crate::design::Design;
use crate::element::Element;
use crate::export::EXPORT_PIXEL_SIZE;

/// Smallest font size considered comfortably readable on a printed shirt.
pub const MIN_READABLE_FONT_SIZE: f32 = 14.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Warning,
    Fail,
}

#[derive(Debug, Clone)]
pub struct ComplianceCheck {
    pub id: &'static str,
    pub name: &'static str,
    pub status: CheckStatus,
    pub message: String,
}

/// Marketplace-readiness report shown in the properties panel and the
/// export screen. Most checks are fixed verdicts standing in for a real
/// validation backend; only text readability looks at the design.
#[derive(Debug, Clone)]
pub struct ComplianceReport {
    pub checks: Vec<ComplianceCheck>,
    pub score: u32,
}

impl ComplianceReport {
    pub fn passed(&self) -> bool {
        self.checks.iter().all(|c| c.status != CheckStatus::Fail)
    }
}

/// Evaluate the design against the marketplace checklist.
pub fn evaluate(design: &Design) -> ComplianceReport {
    let (print_w, print_h) = EXPORT_PIXEL_SIZE;
    let mut checks = vec![
        ComplianceCheck {
            id: "resolution",
            name: "Resolution",
            status: CheckStatus::Pass,
            message: "300 DPI".to_owned(),
        },
        ComplianceCheck {
            id: "size",
            name: "Print size",
            status: CheckStatus::Pass,
            message: format!("{print_w}\u{d7}{print_h} px"),
        },
        ComplianceCheck {
            id: "colors",
            name: "Color profile",
            status: CheckStatus::Pass,
            message: "RGB".to_owned(),
        },
    ];

    checks.push(text_readability(design));

    checks.push(ComplianceCheck {
        id: "content",
        name: "Content",
        status: CheckStatus::Pass,
        message: "No restricted content detected".to_owned(),
    });

    let score = score_from(&checks);
    ComplianceReport { checks, score }
}

fn text_readability(design: &Design) -> ComplianceCheck {
    let smallest = design
        .elements()
        .iter()
        .filter_map(|e| match e {
            Element::Text(text) => Some(text.font_size),
            Element::Shape(_) => None,
        })
        .fold(f32::INFINITY, f32::min);

    if smallest.is_finite() && smallest < MIN_READABLE_FONT_SIZE {
        ComplianceCheck {
            id: "text",
            name: "Text readability",
            status: CheckStatus::Warning,
            message: format!(
                "Smallest text is {smallest:.0}pt, {MIN_READABLE_FONT_SIZE:.0}pt+ recommended"
            ),
        }
    } else {
        ComplianceCheck {
            id: "text",
            name: "Text readability",
            status: CheckStatus::Pass,
            message: "All text at a readable size".to_owned(),
        }
    }
}

fn score_from(checks: &[ComplianceCheck]) -> u32 {
    let penalty: u32 = checks
        .iter()
        .map(|c| match c.status {
            CheckStatus::Pass => 0,
            CheckStatus::Warning => 15,
            CheckStatus::Fail => 40,
        })
        .sum();
    100u32.saturating_sub(penalty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{Element, factory};
    use egui::Pos2;

    #[test]
    fn clean_design_scores_full_marks() {
        let report = evaluate(&Design::starter());
        assert_eq!(report.score, 100);
        assert!(report.passed());
    }

    #[test]
    fn small_text_warns_and_lowers_score() {
        let mut design = Design::default();
        let mut element = factory::create_text(1, "tiny", Pos2::new(10.0, 10.0));
        if let Element::Text(text) = &mut element {
            text.font_size = 10.0;
        }
        design.add_element(element);

        let report = evaluate(&design);
        let text_check = report.checks.iter().find(|c| c.id == "text").unwrap();
        assert_eq!(text_check.status, CheckStatus::Warning);
        assert_eq!(report.score, 85);
        assert!(report.passed());
    }
}
