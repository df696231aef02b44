//! User registration: validation, persistence, email and logging are
//! separate; `RegistrationService` only decides the order they run in.

use std::io::{self, Write};

use super::ValidationError;
use crate::demo::DemoContext;
use crate::error;

pub const MIN_PASSWORD_LEN: usize = 6;

pub struct UserValidator;

impl UserValidator {
    pub fn validate_email(&self, email: &str) -> Result<(), ValidationError> {
        if !email.contains('@') {
            return Err(ValidationError::InvalidEmail { field: "email" });
        }
        Ok(())
    }

    pub fn validate_password(&self, password: &str) -> Result<(), ValidationError> {
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::TooShort {
                field: "password",
                min: MIN_PASSWORD_LEN,
            });
        }
        Ok(())
    }
}

/// Stands in for a database table.
#[derive(Debug, Default)]
pub struct UserRepository {
    emails: Vec<String>,
}

impl UserRepository {
    pub fn save_user(&mut self, email: &str, _password: &str, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Saving user to database: {}", email)?;
        self.emails.push(email.to_string());
        Ok(())
    }

    pub fn saved_emails(&self) -> &[String] {
        &self.emails
    }
}

pub struct EmailService;

impl EmailService {
    pub fn send_welcome_email(&self, email: &str, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Sending welcome email to: {}", email)
    }
}

pub struct LoggerService;

impl LoggerService {
    pub fn log(&self, message: &str, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", message)
    }
}

pub struct RegistrationService {
    validator: UserValidator,
    repository: UserRepository,
    email: EmailService,
    logger: LoggerService,
}

impl Default for RegistrationService {
    fn default() -> Self {
        Self {
            validator: UserValidator,
            repository: UserRepository::default(),
            email: EmailService,
            logger: LoggerService,
        }
    }
}

impl RegistrationService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `Ok(false)` when validation rejected the user.
    pub fn register(&mut self, email: &str, password: &str, out: &mut dyn Write) -> io::Result<bool> {
        let checked = self
            .validator
            .validate_email(email)
            .and_then(|()| self.validator.validate_password(password));

        if let Err(err) = checked {
            tracing::info!(%err, email, "registration rejected");
            self.logger.log(rejection_message(&err), out)?;
            return Ok(false);
        }

        self.repository.save_user(email, password, out)?;
        self.email.send_welcome_email(email, out)?;
        self.logger
            .log(&format!("User registration successful: {}", email), out)?;
        Ok(true)
    }

    pub fn repository(&self) -> &UserRepository {
        &self.repository
    }
}

fn rejection_message(err: &ValidationError) -> &'static str {
    match err {
        ValidationError::InvalidEmail { .. } => "Invalid email",
        ValidationError::TooShort { .. } => "Password too short",
        _ => "Registration failed",
    }
}

pub fn run(ctx: &mut DemoContext<'_>) -> error::Result<()> {
    let mut service = RegistrationService::new();

    service.register("mohit@example.com", "secret123", ctx.out)?;
    service.register("bad-email", "secret123", ctx.out)?;
    service.register("short@example.com", "123", ctx.out)?;
    Ok(())
}
