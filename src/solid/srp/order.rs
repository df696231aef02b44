//! Order processing: the order is plain data; rules, persistence and the
//! customer notification live elsewhere.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::{require_text, write_scratch, ValidationError};
use crate::demo::DemoContext;
use crate::error;

#[derive(Debug, Clone)]
pub struct Order {
    pub id: String,
    pub customer_id: String,
    pub total: f64,
    pub item_count: u32,
}

impl Order {
    pub fn new(id: impl Into<String>, customer_id: impl Into<String>, total: f64, item_count: u32) -> Self {
        Self {
            id: id.into(),
            customer_id: customer_id.into(),
            total,
            item_count,
        }
    }

    pub fn file_name(&self) -> String {
        format!("order_{}.txt", self.id)
    }
}

pub struct OrderValidator;

impl OrderValidator {
    pub fn validate(&self, order: &Order) -> Result<(), ValidationError> {
        require_text("id", &order.id)?;
        require_text("customer id", &order.customer_id)?;
        if order.total.is_nan() || order.total <= 0.0 {
            return Err(ValidationError::NotPositive { field: "total" });
        }
        if order.item_count == 0 {
            return Err(ValidationError::NotPositive { field: "item count" });
        }
        Ok(())
    }
}

pub struct OrderStorage;

impl OrderStorage {
    pub fn save(&self, order: &Order, path: &Path, out: &mut dyn Write) -> io::Result<PathBuf> {
        let line = format!(
            "Order {} | Customer {} | Total {:.2} | Items {}",
            order.id, order.customer_id, order.total, order.item_count
        );
        let written = write_scratch(path, &line)?;
        writeln!(out, "Order saved to: {}", written.display())?;
        Ok(written)
    }
}

pub struct OrderNotifier;

impl OrderNotifier {
    pub fn send_confirmation(&self, order: &Order, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "--- Confirmation (simulated) ---")?;
        writeln!(out, "To customer: {}", order.customer_id)?;
        writeln!(
            out,
            "Order {} confirmed. Total: {}, Items: {}",
            order.id, order.total, order.item_count
        )?;
        writeln!(out, "--- Sent ---")
    }
}

pub fn run(ctx: &mut DemoContext<'_>) -> error::Result<()> {
    let order = Order::new("ORD-001", "cust-42", 99.50, 3);

    if let Err(err) = OrderValidator.validate(&order) {
        tracing::info!(%err, order = %order.id, "order rejected");
        writeln!(ctx.out, "Order validation failed.")?;
        return Ok(());
    }
    writeln!(ctx.out, "Order validated.")?;

    let path = ctx.scratch_path(&order.file_name());
    OrderStorage.save(&order, &path, ctx.out)?;

    OrderNotifier.send_confirmation(&order, ctx.out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::capture;
    use std::fs;

    #[test]
    fn test_validator_rules() {
        let ok = Order::new("A", "c", 1.0, 1);
        assert!(OrderValidator.validate(&ok).is_ok());

        let free = Order::new("A", "c", 0.0, 1);
        assert_eq!(
            OrderValidator.validate(&free),
            Err(ValidationError::NotPositive { field: "total" })
        );

        let empty = Order::new("A", "c", 5.0, 0);
        assert_eq!(
            OrderValidator.validate(&empty),
            Err(ValidationError::NotPositive { field: "item count" })
        );

        let anonymous = Order::new("A", " ", 5.0, 1);
        assert_eq!(
            OrderValidator.validate(&anonymous),
            Err(ValidationError::Blank { field: "customer id" })
        );
    }

    #[test]
    fn test_nan_total_is_rejected() {
        let order = Order::new("A", "c", f64::NAN, 1);
        assert!(OrderValidator.validate(&order).is_err());
    }

    #[test]
    fn test_transcript() {
        let dir = tempfile::tempdir().unwrap();
        let output = capture(run, dir.path()).unwrap();

        let expected_path = fs::canonicalize(dir.path())
            .unwrap()
            .join("order_ORD-001.txt");
        assert_eq!(
            output,
            format!(
                "Order validated.\n\
                 Order saved to: {}\n\
                 --- Confirmation (simulated) ---\n\
                 To customer: cust-42\n\
                 Order ORD-001 confirmed. Total: 99.5, Items: 3\n\
                 --- Sent ---\n",
                expected_path.display()
            )
        );
        assert_eq!(
            fs::read_to_string(expected_path).unwrap(),
            "Order ORD-001 | Customer cust-42 | Total 99.50 | Items 3"
        );
    }
}
