use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use kana_cli::commands::{config_ops, convert_ops};
use kana_cli::trace_init::init_tracing;
use kana_core::field::FieldType;
use kana_core::romaji::{ConvertOptions, NPolicy, TargetScript};
use kana_core::unicode::{hiragana_to_katakana, katakana_to_hiragana};

#[derive(Parser)]
#[command(name = "kanatool", about = "Romaji to kana conversion tool")]
struct Cli {
    /// Directory for the JSONL trace log (only with the `trace` feature)
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum Script {
    Hiragana,
    Katakana,
}

impl From<Script> for TargetScript {
    fn from(s: Script) -> Self {
        match s {
            Script::Hiragana => TargetScript::Hiragana,
            Script::Katakana => TargetScript::Katakana,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Field {
    Hiragana,
    Katakana,
    Romaji,
}

impl From<Field> for FieldType {
    fn from(f: Field) -> Self {
        match f {
            Field::Hiragana => FieldType::Hiragana,
            Field::Katakana => FieldType::Katakana,
            Field::Romaji => FieldType::Romaji,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum NMode {
    Nasal,
    Literal,
}

impl From<NMode> for NPolicy {
    fn from(n: NMode) -> Self {
        match n {
            NMode::Nasal => NPolicy::Nasal,
            NMode::Literal => NPolicy::Literal,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Convert romaji to kana
    Convert {
        /// Romaji text
        text: String,
        /// Output script
        #[arg(long, value_enum, default_value = "hiragana")]
        script: Script,
        /// How a bare "n" resolves (defaults to the settings file)
        #[arg(long, value_enum)]
        n_policy: Option<NMode>,
        /// Also geminate doubled c/f/j/v
        #[arg(long)]
        extended_gemination: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Detect the script of a text
    Detect {
        text: String,
        /// Skip ー and ・, which both syllabaries use
        #[arg(long)]
        ignore_marks: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Convert input the way an answer field of the given type would
    Field {
        input: String,
        /// Field type
        #[arg(long, value_enum)]
        field: Field,
        /// Script romaji fields are converted to
        #[arg(long, value_enum)]
        prefer: Option<Script>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Settle typed romaji, keeping an incomplete tail pending
    Compose {
        pending: String,
        /// Resolve everything, including a trailing "n"
        #[arg(long)]
        force: bool,
    },
    /// Map hiragana to katakana
    ToKatakana { text: String },
    /// Map katakana to hiragana
    ToHiragana { text: String },
    /// Romaji table operations
    Romaji {
        #[command(subcommand)]
        action: TableAction,
    },
    /// Settings operations
    Settings {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum TableAction {
    /// Print the default romaji TOML
    Export,
    /// Validate a romaji TOML file
    Validate { file: String },
    /// Print the active table as romaji / hiragana / katakana columns
    Table,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the default settings TOML
    Export,
    /// Validate a settings TOML file
    Validate { file: String },
}

fn main() {
    let cli = Cli::parse();

    let _trace = cli.log_dir.as_deref().and_then(init_tracing);

    match cli.command {
        Command::Convert {
            text,
            script,
            n_policy,
            extended_gemination,
            json,
        } => {
            let defaults = kana_core::settings::settings().convert_options();
            let opts = ConvertOptions {
                n_policy: n_policy.map_or(defaults.n_policy, NPolicy::from),
                extended_gemination: defaults.extended_gemination || extended_gemination,
            };
            convert_ops::convert_cmd(&text, script.into(), &opts, json);
        }
        Command::Detect {
            text,
            ignore_marks,
            json,
        } => convert_ops::detect_cmd(&text, ignore_marks, json),
        Command::Field {
            input,
            field,
            prefer,
            json,
        } => convert_ops::field_cmd(&input, field.into(), prefer.map(Into::into), json),
        Command::Compose { pending, force } => convert_ops::compose_cmd(&pending, force),
        Command::ToKatakana { text } => println!("{}", hiragana_to_katakana(&text)),
        Command::ToHiragana { text } => println!("{}", katakana_to_hiragana(&text)),
        Command::Romaji { action } => match action {
            TableAction::Export => config_ops::romaji_export(),
            TableAction::Validate { file } => config_ops::romaji_validate(&file),
            TableAction::Table => config_ops::romaji_table(),
        },
        Command::Settings { action } => match action {
            ConfigAction::Export => config_ops::settings_export(),
            ConfigAction::Validate { file } => config_ops::settings_validate(&file),
        },
    }
}
