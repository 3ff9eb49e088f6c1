use clap::{CommandFactory, Parser, Subcommand};
use cli::handlers::{DeviceArgs, handle_configure, handle_table};
use reshaped_gemm::{DataType, GemmShape};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Select the reshaped GEMM configuration for a single problem
    Configure {
        /// Rows of the output
        #[arg(short, long)]
        m: u32,
        /// Columns of the output
        #[arg(short, long)]
        n: u32,
        /// Reduction dimension
        #[arg(short, long, default_value_t = 1)]
        k: u32,
        /// Batch count
        #[arg(short, long, default_value_t = 1)]
        batch: u32,
        /// Element type: f32, f16, qasymm8, ...
        #[arg(short, long)]
        data_type: DataType,
        /// Print the descriptors as JSON
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        device: DeviceArgs,
    },
    /// Print the narrow and wide selections of every data type
    Table {
        /// Rows of the output
        #[arg(short, long, default_value_t = 64)]
        m: u32,
        #[command(flatten)]
        device: DeviceArgs,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Configure {
            m,
            n,
            k,
            batch,
            data_type,
            json,
            device,
        }) => handle_configure(&device, GemmShape::new(m, n, k, batch), data_type, json),
        Some(Commands::Table {
            m,
            device,
        }) => handle_table(&device, m),
        None => {
            let mut cmd = Cli::command();
            cmd.print_help()?;
            Ok(())
        },
    }
}
