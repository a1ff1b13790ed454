//! RISC-V datapath simulator CLI.
//!
//! This binary drives the stage sequencer over a program produced by the assembler. It performs:
//! 1. **Run:** Execute until the end-of-program sentinel and print registers, memory, and statistics,
//!    optionally dumping registers per instruction or tracing one instruction's latches.
//! 2. **Step:** Execute a fixed number of stages, printing the latches after each one.
//! 3. **Disassemble:** List the instruction section with mnemonics.

use std::error::Error;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::{fs, process};

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use rvstep_core::config::Config;
use rvstep_core::isa::disasm::disassemble;
use rvstep_core::sim::{DebugTrace, loader};
use rvstep_core::sim::snapshot::LatchView;
use rvstep_core::{SimError, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "rvstep",
    author,
    version,
    about = "Single-instruction, five-stage RISC-V datapath simulator",
    long_about = "Load an assembled program (`<address> <word>` lines ending with 0xDEADBEEF, \
                  followed by `<address> <byte>` data lines) and run it one stage at a time.\n\n\
                  Examples:\n  rvstep run prog.mc\n  rvstep run prog.mc --json\n  \
                  rvstep run prog.mc --print-registers --trace-inst 3\n  \
                  rvstep step prog.mc --stages 10\n  rvstep disasm prog.mc"
)]
struct Cli {
    /// JSON configuration file (defaults are used when omitted).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit a trace line for every stage.
    #[arg(long, global = true)]
    trace: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a program until the end-of-program sentinel.
    Run {
        /// Assembled program file.
        program: PathBuf,

        /// Override the configured instruction limit.
        #[arg(long)]
        max_instructions: Option<u64>,

        /// Print the final state as a JSON snapshot.
        #[arg(long)]
        json: bool,

        /// Statistics sections to print (summary, mix, branch); all by default.
        #[arg(long = "stats", value_delimiter = ',')]
        stats: Vec<String>,

        /// Print the register file after every instruction.
        #[arg(long)]
        print_registers: bool,

        /// Print the latches of instruction N (1-based) after each of its stages.
        #[arg(long = "trace-inst", value_name = "N")]
        trace_inst: Option<u64>,
    },

    /// Run a number of stages, printing the latches after each.
    Step {
        /// Assembled program file.
        program: PathBuf,

        /// Number of stages to run.
        #[arg(short, long, default_value_t = 5)]
        stages: usize,
    },

    /// List the instruction section with disassembly.
    Disasm {
        /// Assembled program file.
        program: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = dispatch(cli) {
        eprintln!("\n[!] FATAL: {err}");
        let mut source = err.source();
        while let Some(cause) = source {
            eprintln!("    caused by: {cause}");
            source = cause.source();
        }
        process::exit(1);
    }
}

/// Loads configuration, installs logging, and runs the selected subcommand.
fn dispatch(cli: Cli) -> Result<(), Box<dyn Error>> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };
    config.general.trace_instructions |= cli.trace;
    init_tracing(config.general.trace_instructions);

    match cli.command {
        Commands::Run {
            program,
            max_instructions,
            json,
            stats,
            print_registers,
            trace_inst,
        } => {
            if let Some(limit) = max_instructions {
                config.general.max_instructions = limit;
            }
            config.general.print_registers |= print_registers;
            if trace_inst.is_some() {
                config.general.trace_instruction = trace_inst;
            }
            cmd_run(&program, &config, json, &stats)
        }
        Commands::Step { program, stages } => cmd_step(&program, &config, stages),
        Commands::Disasm { program } => cmd_disasm(&program),
    }
}

/// Reads a JSON configuration file.
fn load_config(path: &Path) -> Result<Config, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    Ok(Config::from_json(&text)?)
}

/// Installs the `tracing` subscriber; `RUST_LOG` wins over the trace flag.
fn init_tracing(trace: bool) {
    let default = if trace { "rvstep_core=trace" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Runs a program to the sentinel and reports the final state.
fn cmd_run(
    path: &Path,
    config: &Config,
    json: bool,
    sections: &[String],
) -> Result<(), Box<dyn Error>> {
    let program = loader::load_file(path)?;
    debug!(
        words = program.text.len(),
        bytes = program.memory.len(),
        "loaded {}",
        path.display()
    );
    let mut sim = Simulator::new(program, config);

    if !json {
        println!("Configuration:");
        println!(
            "  Trace: {}  Start PC: {:#010x}  SP: {:#010x}  Limit: {}",
            config.general.trace_instructions,
            config.general.start_pc,
            config.general.initial_sp,
            config.general.max_instructions
        );
        println!(
            "  Print registers: {}  Trace inst#: {}",
            config.general.print_registers,
            config
                .general
                .trace_instruction
                .map_or_else(|| "off".to_owned(), |n| n.to_string())
        );
        println!("[*] Program: {}", path.display());
        println!();
    }

    // With --json, stdout carries only the snapshot.
    let out: Box<dyn Write> = if json {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    };
    let mut trace = DebugTrace::new(&config.general, out);
    let outcome = sim.run_with(&mut trace);
    let _ = trace.finish()?;
    if json {
        println!("{}", sim.snapshot().to_json()?);
        return outcome.map(|_| ()).map_err(Into::into);
    }

    match &outcome {
        Ok(retired) => println!("[*] Reached end-of-program after {retired} instructions"),
        Err(err) => println!("[!] Stopped at pc={:#010x}: {err}", sim.cpu.pc),
    }
    println!();
    println!("{}", sim.cpu.regs.dump());
    print_memory(&sim);
    println!("{}", sim.cpu.stats.report(sections));

    outcome.map(|_| ()).map_err(Into::into)
}

/// Runs `count` stages, printing the latch view after each.
fn cmd_step(path: &Path, config: &Config, count: usize) -> Result<(), Box<dyn Error>> {
    let program = loader::load_file(path)?;
    let mut sim = Simulator::new(program, config);

    for _ in 0..count {
        let pc = sim.cpu.pc;
        match sim.step_stage() {
            Ok(stage) => {
                let view = LatchView::from(&sim.cpu.latches);
                println!(
                    "[{:<3}] pc={:#010x} -> {:#010x}",
                    stage.mnemonic(),
                    pc,
                    sim.cpu.pc
                );
                println!("{}", serde_json::to_string(&view)?);
            }
            Err(SimError::EndOfProgram { pc }) => {
                println!("[*] End of program at pc={pc:#010x}");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}

/// Lists program text with disassembly.
fn cmd_disasm(path: &Path) -> Result<(), Box<dyn Error>> {
    let program = loader::load_file(path)?;
    for (pc, word) in program.text.iter() {
        println!("{pc:#010x}: {word:08x}    {}", disassemble(word));
    }
    Ok(())
}

/// Prints every written memory byte, eight per row.
fn print_memory(sim: &Simulator) {
    if sim.cpu.memory.is_empty() {
        return;
    }
    println!("MEMORY");
    let mut row: Option<u32> = None;
    let mut line = String::new();
    for (addr, byte) in sim.cpu.memory.iter() {
        let base = addr & !0x7;
        if row != Some(base) {
            if !line.is_empty() {
                println!("{line}");
            }
            line = format!("  {base:#010x}:");
            row = Some(base);
        }
        line.push_str(&format!(" +{}={byte:02X}", addr - base));
    }
    if !line.is_empty() {
        println!("{line}");
    }
    println!();
}
