use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::booking::{Banner, BookingForm, BrowserOpener, Field, SubmitOutcome, SystemClock};
use crate::config;

pub enum ContactFormMsg {
    SetField(Field, String),
    Submit,
    Reset,
    ExpireBanner,
}

pub struct ContactForm {
    form: BookingForm,
    banner_timer: TimerSlot<Timeout>,
}

/// The pending banner timer plus the one that fired last. A fired handle
/// can't be dropped inside its own callback, so it is parked here and
/// released on the next expiry or when the form is torn down.
struct TimerSlot<T> {
    active: Option<T>,
    spent: Option<T>,
}

impl<T> Default for TimerSlot<T> {
    fn default() -> Self {
        Self { active: None, spent: None }
    }
}

impl<T> TimerSlot<T> {
    /// Replacing the active handle cancels a timer left over from an earlier submission.
    fn arm(&mut self, timer: T) {
        self.active = Some(timer);
    }

    /// Called from the active timer's callback. Releases the previously parked handle.
    fn retire_fired(&mut self) {
        self.spent = self.active.take();
    }
}

impl Component for ContactForm {
    type Message = ContactFormMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: BookingForm::new(),
            banner_timer: TimerSlot::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactFormMsg::SetField(field, value) => {
                self.form.update_field(field, value);
                true
            }
            ContactFormMsg::Submit => match self.form.submit(&BrowserOpener, &SystemClock) {
                SubmitOutcome::Rejected => {
                    debug!("{} field(s) need attention", self.form.errors().len());
                    true
                }
                SubmitOutcome::Sent { url } => {
                    debug!("Opened {}", url);
                    self.arm_banner_timer(ctx, config::SUCCESS_BANNER_MS);
                    true
                }
            },
            ContactFormMsg::Reset => {
                self.form.reset();
                true
            }
            ContactFormMsg::ExpireBanner => {
                self.banner_timer.retire_fired();
                match self.form.tick_banner(&SystemClock) {
                    Banner::Hidden => true,
                    Banner::Visible { remaining_ms } => {
                        self.arm_banner_timer(ctx, remaining_ms);
                        false
                    }
                }
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactFormMsg::Submit
        });
        let onreset = ctx.link().callback(|_: MouseEvent| ContactFormMsg::Reset);
        let on_message = ctx.link().callback(|e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            ContactFormMsg::SetField(Field::Message, input.value())
        });

        html! {
            <section id="contato" class="booking-section">
                <h2>{"Agende sua Consulta"}</h2>
                <p class="booking-intro">
                    {"Preencha o formulario abaixo para agendar uma consulta comigo. Entrarei em contato em breve para confirmar sua disponibilidade."}
                </p>

                if self.form.is_success_shown() {
                    <div class="booking-success">
                        <span class="booking-success-icon">{"✔"}</span>
                        <p>{"Formulario enviado com sucesso! Redirecionando para WhatsApp..."}</p>
                    </div>
                }

                <form class="booking-form" {onsubmit} novalidate={true}>
                    <div class="booking-row">
                        { self.text_input(ctx, Field::Name, "Nome Completo *", "text", "Seu nome") }
                        { self.text_input(ctx, Field::Email, "Email *", "email", "seu@email.com") }
                    </div>
                    <div class="booking-row">
                        { self.text_input(ctx, Field::Phone, "Telefone/WhatsApp *", "tel", "(21) 99999-9999") }
                        { self.text_input(ctx, Field::Date, "Data Desejada *", "date", "") }
                    </div>
                    { self.text_input(ctx, Field::Time, "Hora Desejada *", "time", "") }

                    <div class="booking-field">
                        <label for="booking-mensagem">{"Mensagem Adicional"}</label>
                        <textarea
                            id="booking-mensagem"
                            name={Field::Message.input_name()}
                            rows="4"
                            placeholder="Conte-me um pouco sobre sua situacao (opcional)"
                            value={self.form.request().message.clone()}
                            oninput={on_message}
                        />
                    </div>

                    <div class="booking-actions">
                        <button type="submit" class="booking-submit">{"➤ Agendar Consulta"}</button>
                        <button type="button" class="booking-reset" onclick={onreset}>{"Limpar"}</button>
                    </div>
                </form>

                <p class="booking-footnote">
                    {"Ao enviar este formulario, voce sera redirecionado para o WhatsApp para confirmar sua consulta."}
                </p>
            </section>
        }
    }
}

impl ContactForm {
    fn arm_banner_timer(&mut self, ctx: &Context<Self>, delay_ms: u32) {
        let link = ctx.link().clone();
        self.banner_timer.arm(Timeout::new(delay_ms, move || {
            link.send_message(ContactFormMsg::ExpireBanner);
        }));
    }

    fn text_input(&self, ctx: &Context<Self>, field: Field, label: &'static str, kind: &'static str, placeholder: &'static str) -> Html {
        let id = format!("booking-{}", field.input_name());
        let errors = self.form.errors();
        let oninput = ctx.link().callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ContactFormMsg::SetField(field, input.value())
        });

        html! {
            <div class="booking-field">
                <label for={id.clone()}>{label}</label>
                <input
                    id={id}
                    type={kind}
                    name={field.input_name()}
                    placeholder={placeholder}
                    value={self.form.request().get(field).to_string()}
                    class={classes!("booking-input", errors.contains(field).then(|| "has-error"))}
                    {oninput}
                />
                if let Some(message) = errors.get(field) {
                    <p class="booking-error">{message}</p>
                }
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct CountsDrops(Rc<Cell<usize>>);

    impl Drop for CountsDrops {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn fired_timer_is_parked_then_released_on_next_expiry() {
        let dropped = Rc::new(Cell::new(0));
        let mut slot = TimerSlot::default();

        slot.arm(CountsDrops(dropped.clone()));
        slot.retire_fired();
        assert_eq!(dropped.get(), 0);
        assert!(slot.active.is_none());

        slot.arm(CountsDrops(dropped.clone()));
        slot.retire_fired();
        assert_eq!(dropped.get(), 1);

        drop(slot);
        assert_eq!(dropped.get(), 2);
    }

    #[test]
    fn rearming_drops_the_pending_timer() {
        let dropped = Rc::new(Cell::new(0));
        let mut slot = TimerSlot::default();

        slot.arm(CountsDrops(dropped.clone()));
        slot.arm(CountsDrops(dropped.clone()));

        assert_eq!(dropped.get(), 1);
        assert!(slot.spent.is_none());
    }
}
