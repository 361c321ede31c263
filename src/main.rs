use clap::Parser;
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use vendsim::application::loader::load_inventory;
use vendsim::application::service::VendingService;
use vendsim::config::MachineConfig;
use vendsim::domain::machine::VendingMachine;
use vendsim::domain::money::Amount;
use vendsim::infrastructure::file_source::FileInventorySource;
use vendsim::interfaces::csv::command_reader::CommandReader;
use vendsim::interfaces::csv::inventory_writer::InventoryWriter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON inventory seed file
    inventory: PathBuf,

    /// Commands CSV file (type, selection, quantity, amount)
    script: Option<PathBuf>,

    /// Balance the machine starts with
    #[arg(long, default_value_t = Decimal::ZERO)]
    initial_balance: Decimal,
}

#[tokio::main]
async fn main() -> Result<()> {
    vendsim::observability::init();
    let cli = Cli::parse();

    let source = FileInventorySource::new(&cli.inventory);
    let inventory = load_inventory(&source).await.into_diagnostic()?;

    let initial_balance = Amount::new(cli.initial_balance).into_diagnostic()?;
    let config = MachineConfig::default().with_initial_balance(initial_balance);
    let service = VendingService::new(VendingMachine::with_config(inventory, &config));

    if let Some(script) = cli.script {
        let file = File::open(script).into_diagnostic()?;
        let reader = CommandReader::new(file);
        for command in reader.commands() {
            match command {
                Ok(command) => {
                    if let Err(e) = service.process_command(command).await {
                        eprintln!("Error processing command: {}", e);
                    }
                }
                Err(e) => {
                    eprintln!("Error reading command: {}", e);
                }
            }
        }
    }

    let machine = service.snapshot().await;
    let stdout = io::stdout();
    let mut writer = InventoryWriter::new(stdout.lock());
    writer.write_machine(&machine).into_diagnostic()?;

    Ok(())
}
