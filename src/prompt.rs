//! Terminal front end: walks the user through the booking form line by line.

use std::fmt::Write as _;

use anyhow::Context;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};

use crate::errors::AppError;
use crate::models::SelectOption;
use crate::services::form::BookingForm;
use crate::services::validation::ValidationError;
use crate::state::AppState;

pub struct Session<'a, R, W> {
    state: &'a AppState,
    form: BookingForm,
    lines: Lines<R>,
    out: W,
}

const RETRY_PROMPT: &str = "Повторить отправку? (д — повторить, н — выбрать другое время)";

/// `None` from a prompt means the input ended.
type Answer = Option<String>;

impl<'a, R, W> Session<'a, R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(state: &'a AppState, input: R, out: W) -> Self {
        Self {
            state,
            form: BookingForm::new(&state.config),
            lines: input.lines(),
            out,
        }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Runs bookings until the user declines another one or input ends.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            if !self.fill_form().await? || !self.submit_until_done().await? {
                return Ok(());
            }
            match self.ask("Записаться ещё? (д/н)").await? {
                Some(a) if is_yes(&a) => continue,
                _ => return Ok(()),
            }
        }
    }

    async fn fill_form(&mut self) -> anyhow::Result<bool> {
        Ok(self.ask_date().await?
            && self.ask_time().await?
            && self.ask_specialist().await?
            && self.ask_service().await?
            && self.ask_name().await?
            && self.ask_phone().await?)
    }

    /// Submits and handles failures; `false` means the user gave up.
    async fn submit_until_done(&mut self) -> anyhow::Result<bool> {
        loop {
            let submitted = self
                .form
                .submit(self.state.backend.as_ref())
                .await
                .map(|conf| format!("\n{conf}\n"));
            let err = match submitted {
                Ok(text) => {
                    self.say(&text).await?;
                    if self.ask("Нажмите Enter, чтобы закрыть").await?.is_none() {
                        return Ok(false);
                    }
                    self.form.close_confirmation()?;
                    return Ok(true);
                }
                Err(e) => e,
            };

            self.alert(&err).await?;
            let answered = match err {
                AppError::Validation(ValidationError::InvalidPhone) => self.ask_phone().await?,
                AppError::Validation(ValidationError::InvalidName) => self.ask_name().await?,
                AppError::Validation(ValidationError::MissingFields) => self.fill_form().await?,
                // Anything but "yes" goes back to picking a slot; the rest of the form stays.
                AppError::BookingFailed(_) => match self.ask(RETRY_PROMPT).await? {
                    Some(a) if is_yes(&a) => true,
                    Some(_) => self.ask_date().await? && self.ask_time().await?,
                    None => false,
                },
                other => return Err(other.into()),
            };
            if !answered {
                return Ok(false);
            }
        }
    }

    async fn ask_date(&mut self) -> anyhow::Result<bool> {
        loop {
            let Some(date) = self.ask("Дата (ГГГГ-ММ-ДД):").await? else {
                return Ok(false);
            };
            match self.form.change_date(self.state.backend.as_ref(), &date).await {
                Ok(()) if self.form.slots().is_empty() => {
                    self.say("Нет свободного времени на эту дату.").await?;
                }
                Ok(()) => return Ok(true),
                Err(e) => self.alert(&e).await?,
            }
        }
    }

    async fn ask_time(&mut self) -> anyhow::Result<bool> {
        let options = self.form.time_options();
        let Some(time) = self.choose("Время:", &options).await? else {
            return Ok(false);
        };
        self.form.select_time(&time)?;
        Ok(true)
    }

    async fn ask_specialist(&mut self) -> anyhow::Result<bool> {
        let options = self.form.specialist_options();
        let Some(specialist) = self.choose("Специалист:", &options).await? else {
            return Ok(false);
        };
        self.form.select_specialist(&specialist)?;
        Ok(true)
    }

    async fn ask_service(&mut self) -> anyhow::Result<bool> {
        let options = self.form.service_options();
        let Some(service) = self.choose("Услуга:", &options).await? else {
            return Ok(false);
        };
        self.form.select_service(&service)?;

        if self.form.strizhka_visible() {
            let options = self.form.strizhka_options();
            let Some(kind) = self.choose("Тип стрижки:", &options).await? else {
                return Ok(false);
            };
            self.form.select_strizhka_type(&kind)?;
        }
        Ok(true)
    }

    async fn ask_name(&mut self) -> anyhow::Result<bool> {
        let Some(name) = self.ask("ФИО:").await? else {
            return Ok(false);
        };
        self.form.set_name(name.trim());
        Ok(true)
    }

    async fn ask_phone(&mut self) -> anyhow::Result<bool> {
        let Some(raw) = self.ask("Телефон:").await? else {
            return Ok(false);
        };
        self.form.phone_input(&raw);
        let formatted = self.form.phone_blur().to_string();
        if !formatted.is_empty() {
            self.say(&format!("Телефон: {formatted}")).await?;
        }
        Ok(true)
    }

    /// Numbered menu over the non-placeholder options; returns the chosen value.
    async fn choose(&mut self, title: &str, options: &[SelectOption]) -> anyhow::Result<Answer> {
        let items: Vec<&SelectOption> = options.iter().filter(|o| !o.is_placeholder()).collect();
        let mut menu = match options.iter().find(|o| o.is_placeholder()) {
            Some(p) => format!("{title} {}\n", p.label),
            None => format!("{title}\n"),
        };
        for (i, opt) in items.iter().enumerate() {
            let _ = writeln!(menu, "  {}. {}", i + 1, opt.label);
        }

        loop {
            let Some(answer) = self.ask(menu.trim_end()).await? else {
                return Ok(None);
            };
            let picked = answer
                .trim()
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| items.get(i));
            match picked {
                Some(opt) => return Ok(Some(opt.value.clone())),
                None => self.say("Введите номер из списка.").await?,
            }
        }
    }

    async fn ask(&mut self, prompt: &str) -> anyhow::Result<Answer> {
        self.say(prompt).await?;
        self.lines.next_line().await.context("failed to read input")
    }

    async fn alert(&mut self, err: &AppError) -> anyhow::Result<()> {
        let text = format!("! {}", err.alert_message());
        self.say(&text).await
    }

    async fn say(&mut self, text: &str) -> anyhow::Result<()> {
        self.out.write_all(text.as_bytes()).await?;
        self.out.write_all(b"\n").await?;
        self.out.flush().await.context("failed to write output")
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "д" | "да" | "y" | "yes")
}
