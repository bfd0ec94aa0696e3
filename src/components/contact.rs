use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::content;

/// Delay before a success/error banner clears itself.
const STATUS_RESET_MS: u32 = 5_000;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

impl FormStatus {
    pub fn is_sending(self) -> bool {
        self == FormStatus::Sending
    }

    /// Transition taken when the user submits. Refused while a request is in
    /// flight (at most one at a time); allowed from Idle and from a pending
    /// Success/Error banner, which the new submission supersedes — the
    /// caller must also drop the banner's scheduled reset, or it would fire
    /// mid-flight and re-enable the form.
    pub fn begin_submit(self) -> Option<FormStatus> {
        if self.is_sending() {
            None
        } else {
            Some(FormStatus::Sending)
        }
    }

    /// Banner to render under the form, as (css class, text). Idle and
    /// Sending show none; Sending feedback lives on the submit button.
    pub fn banner(self) -> Option<(&'static str, &'static str)> {
        match self {
            FormStatus::Success => Some((
                "form-status form-status-success",
                "✅ Thank you! Your message has been sent successfully.",
            )),
            FormStatus::Error => Some((
                "form-status form-status-error",
                "❌ Sorry, there was an error sending your message. Please try again.",
            )),
            FormStatus::Idle | FormStatus::Sending => None,
        }
    }
}

/// URL-encoded body for the host's form handler. The hidden `form-name`
/// field is what routes the submission to the right form on their side.
pub fn encode_contact_body(name: &str, email: &str, message: &str) -> String {
    format!(
        "form-name=contact&name={}&email={}&message={}",
        urlencoding::encode(name),
        urlencoding::encode(email),
        urlencoding::encode(message)
    )
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let status = use_state(FormStatus::default);
    let reset_timer = use_mut_ref(|| None::<Timeout>);
    let mounted = use_mut_ref(|| true);

    // Drop any pending status-reset timer when the form unmounts so it
    // cannot fire into a torn-down component, and lower the mounted flag so
    // an in-flight submission finishing later leaves state alone.
    {
        let reset_timer = reset_timer.clone();
        let mounted = mounted.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    *mounted.borrow_mut() = false;
                    reset_timer.borrow_mut().take();
                }
            },
            (),
        );
    }

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            name.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            email.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            message.set(e.target_unchecked_into::<HtmlTextAreaElement>().value());
        })
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let status = status.clone();
        let reset_timer = reset_timer.clone();
        let mounted = mounted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            // The button is disabled while sending, but guard anyway so a
            // second submit can never race the in-flight request.
            let next = match status.begin_submit() {
                Some(next) => next,
                None => return,
            };
            // A reset scheduled by an earlier success/error banner would set
            // Idle while this request is still in flight; drop it first.
            reset_timer.borrow_mut().take();
            status.set(next);

            let body = encode_contact_body(&name, &email, &message);
            let name = name.clone();
            let email = email.clone();
            let message = message.clone();
            let status = status.clone();
            let reset_timer = reset_timer.clone();
            let mounted = mounted.clone();
            spawn_local(async move {
                let result = Request::post(config::get_form_endpoint())
                    .header("Content-Type", "application/x-www-form-urlencoded")
                    .body(body)
                    .send()
                    .await;

                // The form may have unmounted while the request was in
                // flight; its outcome is then abandoned.
                if !*mounted.borrow() {
                    return;
                }

                match result {
                    Ok(_) => {
                        name.set(String::new());
                        email.set(String::new());
                        message.set(String::new());
                        status.set(FormStatus::Success);
                    }
                    Err(e) => {
                        gloo_console::error!("Contact form submission failed:", e.to_string());
                        status.set(FormStatus::Error);
                    }
                }

                let status = status.clone();
                *reset_timer.borrow_mut() = Some(Timeout::new(STATUS_RESET_MS, move || {
                    status.set(FormStatus::Idle);
                }));
            });
        })
    };

    html! {
        <section id="contact" class="content-section">
            <div class="section-header">
                <div class="section-label">{"Get In Touch"}</div>
                <h2 class="section-title">{"Let's Work Together"}</h2>
                <p class="section-description">
                    {"Have a project in mind or just want to say hi? My inbox is always open."}
                </p>
            </div>

            <div class="contact-container">
                <form class="contact-form" name="contact" method="POST" {onsubmit}>
                    <input type="hidden" name="form-name" value="contact" />
                    <div class="form-group">
                        <input
                            type="text"
                            name="name"
                            placeholder="Your Name"
                            class="form-input"
                            required={true}
                            value={(*name).clone()}
                            oninput={on_name}
                        />
                    </div>

                    <div class="form-group">
                        <input
                            type="email"
                            name="email"
                            placeholder="Your Email"
                            class="form-input"
                            required={true}
                            value={(*email).clone()}
                            oninput={on_email}
                        />
                    </div>

                    <div class="form-group">
                        <textarea
                            name="message"
                            rows="5"
                            placeholder="Your Message"
                            class="form-input form-textarea"
                            required={true}
                            value={(*message).clone()}
                            oninput={on_message}
                        ></textarea>
                    </div>

                    <button type="submit" class="btn-primary" disabled={status.is_sending()}>
                        { if status.is_sending() { "Sending..." } else { "Send Message" } }
                        <span>{"→"}</span>
                    </button>

                    {
                        if let Some((class, text)) = status.banner() {
                            html! { <div {class}>{text}</div> }
                        } else {
                            html! {}
                        }
                    }
                </form>

                <div class="social-links">
                    <a
                        href={content::GITHUB_URL}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="social-link"
                        aria-label="GitHub"
                    >
                        {"GitHub"}
                    </a>
                    <a
                        href={content::LINKEDIN_URL}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="social-link"
                        aria-label="LinkedIn"
                    >
                        {"LinkedIn"}
                    </a>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_starts_idle() {
        assert_eq!(FormStatus::default(), FormStatus::Idle);
    }

    #[test]
    fn only_sending_disables_submit() {
        assert!(FormStatus::Sending.is_sending());
        assert!(!FormStatus::Idle.is_sending());
        assert!(!FormStatus::Success.is_sending());
        assert!(!FormStatus::Error.is_sending());
    }

    #[test]
    fn submit_refused_while_request_in_flight() {
        assert_eq!(FormStatus::Sending.begin_submit(), None);
    }

    #[test]
    fn submit_from_idle_starts_sending() {
        assert_eq!(FormStatus::Idle.begin_submit(), Some(FormStatus::Sending));
    }

    #[test]
    fn resubmit_with_banner_pending_supersedes_it() {
        // A failed submission shows its banner for 5 s; the user may resubmit
        // before it clears, and that submit must win over the pending reset.
        assert_eq!(FormStatus::Error.begin_submit(), Some(FormStatus::Sending));
        assert_eq!(
            FormStatus::Success.begin_submit(),
            Some(FormStatus::Sending)
        );
    }

    #[test]
    fn banners_only_for_terminal_states() {
        assert!(FormStatus::Idle.banner().is_none());
        assert!(FormStatus::Sending.banner().is_none());
        assert!(FormStatus::Success.banner().is_some());
        assert!(FormStatus::Error.banner().is_some());
    }

    #[test]
    fn body_routes_to_the_contact_form() {
        let body = encode_contact_body("Jane", "jane@example.com", "hi");
        assert!(body.starts_with("form-name=contact&"));
        assert!(body.contains("name=Jane"));
        assert!(body.contains("message=hi"));
    }

    #[test]
    fn body_percent_encodes_reserved_characters() {
        let body = encode_contact_body("A B", "a+b@example.com", "x=1&y=2");
        assert!(body.contains("name=A%20B"));
        assert!(body.contains("email=a%2Bb%40example.com"));
        assert!(body.contains("message=x%3D1%26y%3D2"));
    }
}
