use std::rc::Rc;

use serde::Serialize;
use thiserror::Error;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, SubmitEvent};
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Residential,
    Commercial,
    Ev,
    Compliance,
    Other,
}

impl ProjectType {
    pub const ALL: [ProjectType; 5] = [
        ProjectType::Residential,
        ProjectType::Commercial,
        ProjectType::Ev,
        ProjectType::Compliance,
        ProjectType::Other,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            ProjectType::Residential => "residential",
            ProjectType::Commercial => "commercial",
            ProjectType::Ev => "ev",
            ProjectType::Compliance => "compliance",
            ProjectType::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectType::Residential => "Installation résidentielle",
            ProjectType::Commercial => "Projet commercial",
            ProjectType::Ev => "Borne de recharge VE",
            ProjectType::Compliance => "Mise aux normes",
            ProjectType::Other => "Autre",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.value() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Phone,
    Email,
    Message,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Nom",
            Field::Phone => "Téléphone",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Le champ « {} » est requis.", .0.label())]
    MissingField(Field),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDraft {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub project_type: Option<ProjectType>,
    pub message: String,
}

impl ContactDraft {
    fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Phone => self.phone = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    pub fn validate(&self) -> Result<(), FormError> {
        let required = [
            (Field::Name, &self.name),
            (Field::Phone, &self.phone),
            (Field::Email, &self.email),
        ];
        match required.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(FormError::MissingField(*field)),
            None => Ok(()),
        }
    }
}

pub enum FormAction {
    Edit(Field, String),
    SetProjectType(Option<ProjectType>),
    Submit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormView {
    Editing,
    Confirmation,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub draft: ContactDraft,
    pub submitted: bool,
    pub error: Option<FormError>,
}

impl ContactForm {
    pub fn view(&self) -> FormView {
        if self.submitted {
            FormView::Confirmation
        } else {
            FormView::Editing
        }
    }
}

impl Reducible for ContactForm {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        // Nothing changes once submitted.
        if self.submitted {
            return self;
        }
        let mut next = (*self).clone();
        match action {
            FormAction::Edit(field, value) => {
                next.draft.set(field, value);
                next.error = None;
            }
            FormAction::SetProjectType(project_type) => next.draft.project_type = project_type,
            FormAction::Submit => match next.draft.validate() {
                Ok(()) => {
                    match serde_json::to_string(&next.draft) {
                        Ok(payload) => log::debug!("contact request: {}", payload),
                        Err(e) => log::warn!("could not serialize contact request: {}", e),
                    }
                    log::info!("contact form submitted");
                    next.draft = ContactDraft::default();
                    next.submitted = true;
                    next.error = None;
                }
                Err(e) => {
                    log::info!("contact form incomplete: {}", e);
                    next.error = Some(e);
                }
            },
        }
        Rc::new(next)
    }
}

#[function_component(ContactFormCard)]
pub fn contact_form_card() -> Html {
    let form = use_reducer(ContactForm::default);

    if form.view() == FormView::Confirmation {
        return html! {
            <div class="form-card">
                <div class="form-rule"></div>
                <div class="form-confirmation">
                    <div class="confirmation-icon">{"✓"}</div>
                    <h3>{"Message envoyé!"}</h3>
                    <p>{"Nous vous contacterons sous 24h."}</p>
                </div>
                <style>{STYLE}</style>
            </div>
        };
    }

    let on_input = |field: Field| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            form.dispatch(FormAction::Edit(field, value));
        })
    };

    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
            form.dispatch(FormAction::Edit(Field::Message, value));
        })
    };

    let on_project_type = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            form.dispatch(FormAction::SetProjectType(ProjectType::from_value(&value)));
        })
    };

    let on_submit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            form.dispatch(FormAction::Submit);
        })
    };

    let draft = &form.draft;
    let selected = draft.project_type.map(|t| t.value()).unwrap_or("");

    html! {
        <div class="form-card">
            <div class="form-rule"></div>
            <form class="contact-form" onsubmit={on_submit}>
                <div class="form-row">
                    <label>
                        <span>{Field::Name.label()}</span>
                        <input name="name" value={draft.name.clone()} oninput={on_input(Field::Name)} placeholder="Votre nom" required=true />
                    </label>
                    <label>
                        <span>{Field::Phone.label()}</span>
                        <input name="phone" type="tel" value={draft.phone.clone()} oninput={on_input(Field::Phone)} placeholder="(450) 000-0000" required=true />
                    </label>
                </div>
                <label>
                    <span>{Field::Email.label()}</span>
                    <input name="email" type="email" value={draft.email.clone()} oninput={on_input(Field::Email)} placeholder="votre@email.com" required=true />
                </label>
                <label>
                    <span>{"Type de projet"}</span>
                    <select name="projectType" onchange={on_project_type}>
                        <option value="" selected={selected.is_empty()}>{"Sélectionnez un type"}</option>
                        { for ProjectType::ALL.iter().map(|t| html! {
                            <option value={t.value()} selected={selected == t.value()}>{t.label()}</option>
                        }) }
                    </select>
                </label>
                <label>
                    <span>{Field::Message.label()}</span>
                    <textarea name="message" rows="4" value={draft.message.clone()} oninput={on_message} placeholder="Décrivez votre projet..." />
                </label>
                {
                    if let Some(error) = &form.error {
                        html! { <p class="form-error">{error.to_string()}</p> }
                    } else {
                        html! {}
                    }
                }
                <button type="submit" class="btn-gold form-submit">{"Envoyer la demande →"}</button>
            </form>
            <style>{STYLE}</style>
        </div>
    }
}

const STYLE: &str = r#"
.form-card {
    background: #fff;
    border-radius: 1.5rem;
    padding: 2.5rem;
    box-shadow: 0 20px 50px rgba(7, 10, 18, 0.12);
    color: var(--navy);
}
.form-rule {
    height: 4px;
    margin-bottom: 2rem;
    border-radius: 999px;
    background: linear-gradient(90deg, rgba(245, 179, 1, 0.5), var(--gold), rgba(245, 179, 1, 0.5));
}
.contact-form {
    display: flex;
    flex-direction: column;
    gap: 1.25rem;
}
.form-row {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 1.25rem;
}
.contact-form label span {
    display: block;
    margin-bottom: 0.5rem;
    font-size: 0.875rem;
    color: rgba(7, 10, 18, 0.7);
}
.contact-form input,
.contact-form select,
.contact-form textarea {
    width: 100%;
    padding: 1rem;
    border: none;
    border-radius: 0.75rem;
    background: var(--gray-light);
    color: var(--navy);
    font: inherit;
}
.contact-form textarea {
    resize: none;
}
.form-error {
    margin: 0;
    color: #c0392b;
    font-size: 0.875rem;
}
.form-submit {
    justify-content: center;
    width: 100%;
}
.form-confirmation {
    padding: 3rem 0;
    text-align: center;
}
.confirmation-icon {
    width: 4rem;
    height: 4rem;
    margin: 0 auto 1.5rem;
    border-radius: 50%;
    background: #dcfce7;
    color: #16a34a;
    font-size: 2rem;
    line-height: 4rem;
}
.form-confirmation h3 {
    margin: 0 0 0.75rem;
    font-size: 1.5rem;
}
.form-confirmation p {
    margin: 0;
    color: rgba(7, 10, 18, 0.6);
}
@media (max-width: 640px) {
    .form-row { grid-template-columns: 1fr; }
    .form-card { padding: 1.5rem; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> Rc<ContactForm> {
        let mut form = Rc::new(ContactForm::default());
        for (field, value) in [
            (Field::Name, "Julie Gagnon"),
            (Field::Phone, "450 555-0101"),
            (Field::Email, "julie@example.com"),
        ] {
            form = form.reduce(FormAction::Edit(field, value.to_string()));
        }
        form
    }

    #[test]
    fn complete_form_moves_to_confirmation() {
        let form = filled().reduce(FormAction::Submit);
        assert_eq!(form.view(), FormView::Confirmation);
        assert_eq!(form.draft, ContactDraft::default());
        assert!(form.error.is_none());
    }

    #[test]
    fn missing_required_field_stays_editing() {
        let form = filled()
            .reduce(FormAction::Edit(Field::Email, "   ".to_string()))
            .reduce(FormAction::Submit);
        assert_eq!(form.view(), FormView::Editing);
        assert_eq!(form.error, Some(FormError::MissingField(Field::Email)));
        assert_eq!(form.draft.name, "Julie Gagnon");
    }

    #[test]
    fn message_and_project_type_are_optional() {
        let draft = filled().draft.clone();
        assert!(draft.project_type.is_none());
        assert!(draft.message.is_empty());
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn submitting_twice_is_idempotent() {
        let once = filled().reduce(FormAction::Submit);
        let twice = once.clone().reduce(FormAction::Submit);
        assert_eq!(*once, *twice);
        let edited = twice.reduce(FormAction::Edit(Field::Name, "x".to_string()));
        assert_eq!(edited.view(), FormView::Confirmation);
    }

    #[test]
    fn editing_clears_the_error() {
        let form = Rc::new(ContactForm::default()).reduce(FormAction::Submit);
        assert_eq!(form.error, Some(FormError::MissingField(Field::Name)));
        let form = form.reduce(FormAction::Edit(Field::Name, "Luc".to_string()));
        assert!(form.error.is_none());
    }

    #[test]
    fn payload_uses_wire_names() {
        let mut draft = filled().draft.clone();
        draft.project_type = ProjectType::from_value("ev");
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["projectType"], "ev");
        assert_eq!(json["email"], "julie@example.com");
    }

    #[test]
    fn project_type_values_round_trip_through_the_select() {
        for t in ProjectType::ALL {
            assert_eq!(ProjectType::from_value(t.value()), Some(t));
        }
        assert_eq!(ProjectType::from_value(""), None);
    }
}
