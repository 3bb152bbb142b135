//! Contact Page
//!
//! "Drop a Message" form. Field edits go into a [`ContactForm`] signal and
//! submission is handed to a [`FormSubmitter`]; the form keeps its contents
//! afterwards.

use cs_branch::contact::{
    ContactField, ContactForm, FormSubmitter, NoopSubmitter, SubmitError, SOCIAL_CHANNELS,
};
use gloo_timers::callback::Timeout;
use leptos::*;

use crate::components::{Icon, IconKind};

const INPUT_CLASS: &str = "w-full pl-11 pr-4 py-3 bg-gray-50 dark:bg-gray-800 border border-gray-200 dark:border-gray-700 rounded-xl focus:outline-none focus:ring-2 focus:ring-[#FFB347]/20 focus:border-[#FFB347] transition-all text-sm font-medium text-gray-700 dark:text-gray-200";

fn field_icon(field: ContactField) -> IconKind {
    match field {
        ContactField::FirstName | ContactField::LastName => IconKind::User,
        ContactField::Email => IconKind::Mail,
        ContactField::Phone => IconKind::Phone,
        ContactField::Message => IconKind::MessageSquare,
    }
}

/// Outcome line shown under the submit button
#[derive(Debug, Clone, PartialEq, Eq)]
enum SubmitStatus {
    Idle,
    Sent,
    Failed(String),
}

impl SubmitStatus {
    /// How long the line stays up before clearing itself
    fn linger_ms(&self) -> Option<u32> {
        match self {
            SubmitStatus::Idle => None,
            SubmitStatus::Sent => Some(3000),
            SubmitStatus::Failed(_) => Some(5000),
        }
    }
}

fn status_message(result: Result<(), SubmitError>) -> SubmitStatus {
    match result {
        Ok(()) => SubmitStatus::Sent,
        Err(e) => SubmitStatus::Failed(e.to_string()),
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let form = create_rw_signal(ContactForm::default());
    let status = create_rw_signal(SubmitStatus::Idle);
    // Replacing the timeout drops (and cancels) the previous one
    let dismiss = store_value(None::<Timeout>);
    let submitter = NoopSubmitter;

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if form.with(ContactForm::is_blank) {
            return;
        }
        let result = form.with(|f| submitter.submit(f));
        if let Err(e) = &result {
            web_sys::console::error_1(&format!("Contact form not sent: {}", e).into());
        }
        let next = status_message(result);
        let timeout = next
            .linger_ms()
            .map(|ms| Timeout::new(ms, move || status.set(SubmitStatus::Idle)));
        status.set(next);
        dismiss.set_value(timeout);
    };
    on_cleanup(move || dismiss.set_value(None));

    view! {
        <div class="min-h-screen bg-[#E8ECF0] dark:bg-[#0D0D0D] flex items-center justify-center font-sans px-4 md:px-8 pt-24 pb-12 md:pt-44 md:pb-20">
            <div class="w-full max-w-6xl bg-white dark:bg-gray-900 rounded-[30px] shadow-2xl overflow-hidden flex flex-col lg:flex-row min-h-0 lg:min-h-[700px]">
                // Welcome panel
                <div class="lg:w-2/5 bg-[#1F2937] p-8 md:p-12 flex flex-col justify-between relative overflow-hidden min-h-[300px]">
                    <div class="absolute inset-0 bg-gradient-to-br from-[#1F2937] to-black opacity-95" />
                    <div class="absolute top-0 right-0 w-64 h-64 bg-[#003057] rounded-full filter blur-[100px] opacity-30 translate-x-1/2 -translate-y-1/2" />
                    <div class="absolute bottom-0 left-0 w-64 h-64 bg-[#FFB347] rounded-full filter blur-[100px] opacity-10 -translate-x-1/2 translate-y-1/2" />

                    <div class="relative z-10">
                        <div class="mb-8 md:mb-16 flex items-center gap-4">
                            <div class="w-1.5 h-10 bg-[#FFB347] rounded-full shadow-[0_0_12px_rgba(255,179,71,0.6)]" />
                            <span class="text-white font-bold text-lg md:text-xl tracking-wider uppercase">
                                "IEEE Computer Society"
                            </span>
                        </div>
                        <div class="space-y-6">
                            <h2 class="text-3xl md:text-4xl font-bold text-white leading-tight">
                                "Welcome to the " <br />
                                <span class="text-[#FFB347]">"IEEE Computer Society!"</span>
                            </h2>
                            <p class="text-gray-400 text-sm md:text-base lg:text-lg leading-relaxed max-w-sm">
                                "We're here to assist you. " <br />
                                "Reach out to us anytime regarding memberships, events, or collaborations."
                            </p>
                        </div>
                    </div>

                    <div class="relative z-10 mt-12 hidden lg:block">
                        <SocialLinks class="w-10 h-10 rounded-full bg-[#FFB347] text-white flex items-center justify-center hover:bg-white hover:text-[#FFB347] transition-all duration-300 shadow-lg hover:-translate-y-1" />
                    </div>
                </div>

                // Form
                <div class="lg:w-3/5 bg-white dark:bg-gray-900 p-6 md:p-12 lg:p-16 flex flex-col justify-center relative">
                    <div class="max-w-xl mx-auto w-full">
                        <div class="mb-8 md:mb-10">
                            <h1 class="text-2xl md:text-3xl font-bold text-gray-900 dark:text-white">
                                "Drop a Message"
                            </h1>
                            <div class="h-1.5 w-16 bg-[#FFB347] rounded-full mt-2" />
                        </div>

                        <form id="contact-form" class="space-y-4 md:space-y-6" on:submit=on_submit>
                            <div class="grid grid-cols-1 md:grid-cols-2 gap-4 md:gap-6">
                                <FormField field=ContactField::FirstName form=form />
                                <FormField field=ContactField::LastName form=form />
                            </div>
                            <FormField field=ContactField::Email form=form />
                            <FormField field=ContactField::Phone form=form />
                            <FormField field=ContactField::Message form=form />

                            <div class="pt-2 md:pt-4">
                                <button
                                    type="submit"
                                    disabled=move || form.with(ContactForm::is_blank)
                                    class="w-full bg-gradient-to-r from-[#FFB347] to-[#FF9000] text-white font-bold py-3 md:py-4 rounded-xl shadow-lg shadow-orange-200 dark:shadow-none hover:shadow-xl hover:scale-[1.01] transition-all duration-300 flex items-center justify-center gap-2 text-sm md:text-base disabled:opacity-60 disabled:cursor-not-allowed disabled:hover:scale-100"
                                >
                                    <span>"Send Message"</span>
                                    <Icon kind=IconKind::Send size=18 />
                                </button>
                                {move || match status.get() {
                                    SubmitStatus::Idle => ().into_view(),
                                    SubmitStatus::Sent => view! {
                                        <p class="mt-3 text-sm text-green-600 text-center">
                                            "Thanks! We'll get back to you soon."
                                        </p>
                                    }
                                    .into_view(),
                                    SubmitStatus::Failed(reason) => view! {
                                        <p class="mt-3 text-sm text-red-500 text-center">{reason}</p>
                                    }
                                    .into_view(),
                                }}
                            </div>
                        </form>

                        <div class="mt-8 flex justify-center gap-4 lg:hidden">
                            <SocialLinks class="w-8 h-8 rounded-full bg-[#FFB347] text-white flex items-center justify-center hover:bg-[#1F2937] transition-colors shadow-md" />
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn FormField(field: ContactField, form: RwSignal<ContactForm>) -> impl IntoView {
    let value = move || form.with(|f| f.get(field).to_string());
    let on_input = move |ev: ev::Event| form.update(|f| f.set(field, event_target_value(&ev)));

    let input = if field == ContactField::Message {
        view! {
            <textarea
                rows=4
                class=format!("{} resize-none", INPUT_CLASS)
                placeholder=field.placeholder()
                prop:value=value
                on:input=on_input
            />
        }
        .into_view()
    } else {
        view! {
            <input
                type=field.input_type()
                class=INPUT_CLASS
                placeholder=field.placeholder()
                prop:value=value
                on:input=on_input
            />
        }
        .into_view()
    };

    let icon_slot = if field == ContactField::Message {
        "absolute top-3 left-4 pointer-events-none text-gray-400 group-focus-within:text-[#FFB347] transition-colors"
    } else {
        "absolute inset-y-0 left-0 pl-4 flex items-center pointer-events-none text-gray-400 group-focus-within:text-[#FFB347] transition-colors"
    };

    view! {
        <div class="group">
            <label class="block text-xs font-bold text-gray-500 uppercase tracking-wide mb-2 ml-1">
                {field.label()}
            </label>
            <div class="relative">
                <div class=icon_slot>
                    <Icon kind=field_icon(field) size=18 />
                </div>
                {input}
            </div>
        </div>
    }
}

#[component]
fn SocialLinks(class: &'static str) -> impl IntoView {
    view! {
        <div class="flex gap-4">
            {SOCIAL_CHANNELS
                .iter()
                .filter_map(|channel| IconKind::for_social(channel.name).map(|icon| (channel, icon)))
                .map(|(channel, icon)| {
                    view! {
                        <a href=channel.href class=class aria-label=channel.name>
                            <Icon kind=icon size=18 />
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_icons() {
        assert_eq!(field_icon(ContactField::FirstName), IconKind::User);
        assert_eq!(field_icon(ContactField::Phone), IconKind::Phone);
    }

    #[test]
    fn test_status_message() {
        assert_eq!(status_message(Ok(())), SubmitStatus::Sent);
        let failed = status_message(Err(SubmitError::Unavailable("offline".to_string())));
        assert!(matches!(failed, SubmitStatus::Failed(reason) if reason.contains("offline")));
    }

    #[test]
    fn test_status_clears_itself() {
        assert_eq!(SubmitStatus::Idle.linger_ms(), None);
        assert!(SubmitStatus::Sent.linger_ms() < SubmitStatus::Failed(String::new()).linger_ms());
    }

    #[test]
    fn test_blank_form_cannot_be_sent() {
        let mut form = ContactForm::default();
        form.set(ContactField::Message, "   ");
        assert!(form.is_blank());
        form.set(ContactField::Email, "ada@example.com");
        assert!(!form.is_blank());
    }
}
