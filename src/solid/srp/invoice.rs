//! Invoice workflow: the calculator does the math, the repository
//! persists, the email sender communicates, and `InvoiceService` only
//! coordinates them.

use std::fmt;
use std::io::{self, Write};

use crate::demo::DemoContext;
use crate::error;

#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub name: String,
    pub quantity: u32,
    pub unit_price: f64,
}

impl LineItem {
    pub fn new(name: impl Into<String>, quantity: u32, unit_price: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit_price,
        }
    }
}

impl fmt::Display for LineItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LineItem{{name={}, qty={}, unitPrice=${:.2}}}",
            self.name, self.quantity, self.unit_price
        )
    }
}

#[derive(Debug, Clone)]
pub struct Invoice {
    number: String,
    items: Vec<LineItem>,
    // Zero until the calculator has run.
    total: f64,
}

impl Invoice {
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            items: Vec::new(),
            total: 0.0,
        }
    }

    pub fn add_item(&mut self, item: LineItem) {
        self.items.push(item);
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn set_total(&mut self, total: f64) {
        self.total = total;
    }
}

impl fmt::Display for Invoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Invoice{{number={}, items=", self.number)?;
        for item in &self.items {
            writeln!(f, "  {}", item)?;
        }
        write!(f, "total=${:.2}}}", self.total)
    }
}

#[derive(Default)]
pub struct InvoiceCalculator;

impl InvoiceCalculator {
    pub fn calculate_total(&self, invoice: &Invoice) -> f64 {
        invoice
            .items()
            .iter()
            .map(|item| item.unit_price * f64::from(item.quantity))
            .sum()
    }
}

#[derive(Default)]
pub struct InvoiceRepository;

impl InvoiceRepository {
    pub fn save(&self, invoice: &Invoice, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Saving invoice to database...")?;
        writeln!(
            out,
            "Saved: {} with total ${:.2}",
            invoice.number(),
            invoice.total()
        )
    }
}

#[derive(Default)]
pub struct InvoiceEmailSender;

impl InvoiceEmailSender {
    pub fn send(&self, invoice: &Invoice, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Sending invoice email...")?;
        writeln!(out, "To: customer@example.com")?;
        writeln!(out, "Subject: Your invoice {}", invoice.number())?;
        writeln!(out, "Body: Total due = ${:.2}", invoice.total())
    }
}

pub struct InvoiceService {
    calculator: InvoiceCalculator,
    repository: InvoiceRepository,
    email_sender: InvoiceEmailSender,
}

impl InvoiceService {
    pub fn new(
        calculator: InvoiceCalculator,
        repository: InvoiceRepository,
        email_sender: InvoiceEmailSender,
    ) -> Self {
        Self {
            calculator,
            repository,
            email_sender,
        }
    }

    /// calculate -> save -> send
    pub fn process(&self, invoice: &mut Invoice, out: &mut dyn Write) -> io::Result<()> {
        let total = self.calculator.calculate_total(invoice);
        invoice.set_total(total);

        self.repository.save(invoice, out)?;
        self.email_sender.send(invoice, out)
    }
}

pub fn run(ctx: &mut DemoContext<'_>) -> error::Result<()> {
    let mut invoice = Invoice::new("INV-1001");
    invoice.add_item(LineItem::new("Notebook", 2, 5.50));
    invoice.add_item(LineItem::new("Pen", 5, 1.20));

    let service = InvoiceService::new(
        InvoiceCalculator,
        InvoiceRepository,
        InvoiceEmailSender,
    );
    service.process(&mut invoice, ctx.out)?;

    writeln!(ctx.out, "\nDone. Final invoice object:")?;
    writeln!(ctx.out, "{}", invoice)?;
    Ok(())
}
