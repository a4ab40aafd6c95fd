mod case_form;
mod confidence_meter;
mod grievance_form;

use dioxus::prelude::*;
use shared_types::{AnalysisResult, CaseAnalysisRequest, CaseFormInput, GrievanceResult};

use case_form::CaseForm;
use confidence_meter::AnalysisView;
use grievance_form::GrievanceForm;

/// Steps of the case-filing wizard, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    Describe,
    Details,
    Analysis,
}

impl WizardStep {
    /// The previous step, saturating at the first.
    pub fn back(self) -> Self {
        match self {
            WizardStep::Describe | WizardStep::Details => WizardStep::Describe,
            WizardStep::Analysis => WizardStep::Details,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WizardStep::Describe => "Describe",
            WizardStep::Details => "Details",
            WizardStep::Analysis => "Analysis",
        }
    }
}

/// Three-step case-filing wizard: describe the grievance, fill in the case
/// details, review the analysis. The AuthGuard layout keeps anonymous
/// sessions out, so by the time this mounts a user exists.
#[component]
pub fn FileCase() -> Element {
    let mut step = use_signal(WizardStep::default);
    let mut grievance = use_signal(|| Option::<GrievanceResult>::None);
    // Raw form input lives here so going back never loses what was typed.
    let details_input = use_signal(CaseFormInput::default);
    let mut analysis = use_signal(|| Option::<AnalysisResult>::None);
    let mut analyzing = use_signal(|| false);
    let mut analyze_error = use_signal(|| Option::<String>::None);

    let handle_grievance = move |result: GrievanceResult| {
        grievance.set(Some(result));
        step.set(WizardStep::Details);
    };

    let handle_details = move |details: shared_types::CaseDetails| async move {
        let Some(g) = grievance() else { return };

        analyzing.set(true);
        analyze_error.set(None);

        let request = CaseAnalysisRequest {
            grievance_text: if g.translated_text.trim().is_empty() {
                g.summary.clone()
            } else {
                g.translated_text.clone()
            },
            legal_category: g.legal_category.clone(),
            details,
        };

        match server::api::analyze_case(request).await {
            Ok(result) => {
                analysis.set(Some(result));
                step.set(WizardStep::Analysis);
            }
            Err(e) => {
                // Stay on Details; the user can fix inputs and retry.
                analyze_error.set(Some(shared_types::AppError::friendly_message(&e.to_string())));
            }
        }
        analyzing.set(false);
    };

    let handle_back = move |_| {
        analyze_error.set(None);
        step.set(step().back());
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./file_case.css") }

        shared_ui::PageHeader {
            shared_ui::PageTitle { "File a case" }
        }

        div { class: "wizard-steps",
            for s in [WizardStep::Describe, WizardStep::Details, WizardStep::Analysis] {
                span {
                    key: "{s.label()}",
                    class: if s == step() { "wizard-step current" } else { "wizard-step" },
                    {s.label()}
                }
            }
        }

        match step() {
            WizardStep::Describe => rsx! {
                GrievanceForm { on_complete: handle_grievance }
            },
            WizardStep::Details => rsx! {
                CaseForm {
                    input: details_input,
                    category: grievance().map(|g| g.legal_category).unwrap_or_default(),
                    analyzing: analyzing(),
                    analyze_error: analyze_error(),
                    on_back: handle_back,
                    on_submit: handle_details,
                }
            },
            WizardStep::Analysis => rsx! {
                if let Some(result) = analysis() {
                    AnalysisView {
                        analysis: result,
                        category: grievance().map(|g| g.legal_category).unwrap_or_default(),
                        on_back: handle_back,
                    }
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wizard_starts_at_describe() {
        assert_eq!(WizardStep::default(), WizardStep::Describe);
    }

    #[test]
    fn back_walks_one_step_and_saturates() {
        assert_eq!(WizardStep::Analysis.back(), WizardStep::Details);
        assert_eq!(WizardStep::Details.back(), WizardStep::Describe);
        assert_eq!(WizardStep::Describe.back(), WizardStep::Describe);
    }
}
