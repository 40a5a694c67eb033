use crate::layout::footer::footer::{CONTACT_ADDRESS, CONTACT_EMAIL, CONTACT_PHONE};
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_CUSTOM;
use leptos::prelude::*;
use thaw::*;

const BUSINESS_HOURS: &[(&str, &str)] = &[
    ("Monday - Friday", "9:00 AM - 6:00 PM"),
    ("Saturday", "10:00 AM - 4:00 PM"),
    ("Sunday", "Closed"),
];

/// Snapshot of the contact form. Nothing is sent anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    /// Labels of required fields left blank, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("Full Name", &self.name),
            ("Email Address", &self.email),
            ("Subject", &self.subject),
            ("Message", &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| label)
        .collect()
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let notice = RwSignal::new(None::<Result<(), String>>);

    let submit = move |_: leptos::ev::MouseEvent| {
        let form = ContactMessage {
            name: name.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
            subject: subject.get_untracked(),
            message: message.get_untracked(),
        };
        let missing = form.missing_fields();
        if !missing.is_empty() {
            notice.set(Some(Err(format!("Please fill in: {}", missing.join(", ")))));
            return;
        }
        log::info!("contact message from {} ({})", form.name, form.subject);
        for field in [name, email, phone, subject, message] {
            field.set(String::new());
        }
        notice.set(Some(Ok(())));
    };

    let field = |label: &'static str, value: RwSignal<String>, placeholder: &'static str| {
        view! {
            <div class="form__group">
                <label class="form__label">{label}</label>
                <Input value=value placeholder=placeholder />
            </div>
        }
    };

    view! {
        <PageFrame page_id="contact--custom" category=PAGE_CAT_CUSTOM>
            <PageHeader
                title="Contact Us"
                subtitle="Have a question about an institute, admission or test? We are here to help.".to_string()
            />
            <div class="page__content contact-layout">
                <CardAnimated class="contact-form">
                    <h2>"Send us a Message"</h2>
                    {field("Full Name", name, "Enter your full name")}
                    {field("Email Address", email, "your.email@example.com")}
                    {field("Phone Number", phone, "+92 300 1234567")}
                    {field("Subject", subject, "What is this regarding?")}
                    <div class="form__group">
                        <label class="form__label">"Message"</label>
                        <Textarea value=message placeholder="Tell us more about your inquiry..." attr:rows=6 />
                    </div>
                    {move || notice.get().map(|n| match n {
                        Ok(()) => view! {
                            <div class="notice notice--success">
                                {icon("check-circle")}
                                <span>"Message Sent! We'll get back to you within 24 hours."</span>
                            </div>
                        }.into_any(),
                        Err(text) => view! {
                            <div class="notice notice--error">
                                {icon("alert-circle")}
                                <span>{text}</span>
                            </div>
                        }.into_any(),
                    })}
                    <Button appearance=ButtonAppearance::Primary on_click=submit>
                        "Send Message"
                    </Button>
                </CardAnimated>

                <div class="contact-side">
                    <CardAnimated delay_ms=60 class="contact-info">
                        <h2>"Get in Touch"</h2>
                        <div class="contact-info__item">
                            {icon("map-pin")}
                            <div><h3>"Address"</h3><p>{CONTACT_ADDRESS}</p></div>
                        </div>
                        <div class="contact-info__item">
                            {icon("phone")}
                            <div><h3>"Phone"</h3><p>{CONTACT_PHONE}</p></div>
                        </div>
                        <div class="contact-info__item">
                            {icon("mail")}
                            <div><h3>"Email"</h3><p>{CONTACT_EMAIL}</p></div>
                        </div>
                    </CardAnimated>
                    <CardAnimated delay_ms=120 class="contact-hours">
                        <h3>"Business Hours"</h3>
                        <dl class="fact-list">
                            {BUSINESS_HOURS
                                .iter()
                                .map(|(day, hours)| view! { <dt>{*day}</dt><dd>{*hours}</dd> })
                                .collect_view()}
                        </dl>
                    </CardAnimated>
                    <CardAnimated delay_ms=180 class="contact-partner">
                        <h3>"For Institutes"</h3>
                        <p>"Want to list your institute on Beyond Taleem? Contact our partnerships team."</p>
                        <a class="button button--secondary" href=format!("mailto:{CONTACT_EMAIL}")>"Partner With Us"</a>
                    </CardAnimated>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields() {
        let mut form = ContactMessage {
            name: "Ayesha".into(),
            email: " ".into(),
            ..Default::default()
        };
        assert_eq!(form.missing_fields(), ["Email Address", "Subject", "Message"]);

        form.email = "ayesha@example.com".into();
        form.subject = "Admissions".into();
        form.message = "When does MDCAT registration open?".into();
        assert!(form.missing_fields().is_empty());
    }
}
