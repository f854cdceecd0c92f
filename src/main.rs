use clap::Parser;
use miette::{IntoDiagnostic, Result};
use order_strategies::application::demo::{DEMO_CONTACT, run_demo};
use order_strategies::application::processor::OrderProcessor;
use order_strategies::domain::order::Order;
use order_strategies::infrastructure::{NotificationKind, PaymentKind};
use order_strategies::interfaces::csv::order_reader::OrderReader;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Orders CSV file (id,amount,contact). Without it, a single order or the demo is run.
    orders: Option<PathBuf>,

    /// Payment strategy
    #[arg(long, value_enum)]
    payment: Option<PaymentKind>,

    /// Notification strategy
    #[arg(long, value_enum)]
    notification: Option<NotificationKind>,

    /// Order id for a single order
    #[arg(long, requires = "amount", conflicts_with = "orders")]
    id: Option<u32>,

    /// Order amount for a single order
    #[arg(long, conflicts_with = "orders")]
    amount: Option<Decimal>,

    /// Customer contact address for a single order
    #[arg(long, requires = "amount", conflicts_with = "orders")]
    contact: Option<String>,
}

impl Cli {
    fn is_custom(&self) -> bool {
        self.orders.is_some()
            || self.payment.is_some()
            || self.notification.is_some()
            || self.amount.is_some()
    }

    fn processor(&self) -> OrderProcessor {
        OrderProcessor::new(
            self.payment.unwrap_or_default().build(),
            self.notification.unwrap_or_default().build(),
        )
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !cli.is_custom() {
        run_demo(&mut out).into_diagnostic()?;
        return Ok(());
    }

    let processor = cli.processor();

    if let Some(path) = &cli.orders {
        let file = File::open(path).into_diagnostic()?;
        let reader = OrderReader::new(file);
        for order_result in reader.orders() {
            match order_result {
                Ok(mut order) => {
                    if let Err(e) = processor.process(&mut order, &mut out) {
                        eprintln!("Error processing order: {}", e);
                    }
                }
                Err(e) => {
                    eprintln!("Error reading order: {}", e);
                }
            }
        }
    } else {
        let mut order = Order::new(
            cli.id.unwrap_or(123),
            cli.amount.unwrap_or(dec!(150.75)),
            cli.contact.as_deref().unwrap_or(DEMO_CONTACT),
        )
        .into_diagnostic()?;
        processor.process(&mut order, &mut out).into_diagnostic()?;
    }

    out.flush().into_diagnostic()?;
    Ok(())
}
