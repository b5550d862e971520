use clap::Parser;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use um::application::{
    CatService, MoveEntryService, NextEntryService, TagOptions, TagQueryService,
};
use um::cli::{Cli, Commands};
use um::domain::concat::CatOptions;
use um::domain::SortKey;
use um::error::UmError;
use um::infrastructure::stdin::{filelist_from, piped_filelist, read_filelist_file};
use um::infrastructure::{Config, FileSystemRepository};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), UmError> {
    match cli.command {
        Commands::Tag {
            query,
            date,
            invert,
            verbose,
        } => {
            let options = TagOptions {
                query,
                date,
                invert,
                verbose,
            };
            let repo = FileSystemRepository::discover()?;
            let service = TagQueryService::new(repo);
            service.execute(&options, piped_filelist()?, std::io::stdout().lock())
        }
        Commands::Cat {
            filelist,
            base,
            keep_header,
            keep_title,
        } => {
            let options = CatOptions {
                keep_header,
                keep_title,
            };
            let files = filelist_from(filelist.as_deref())?;

            let root = base.unwrap_or_else(|| PathBuf::from("."));
            let service = CatService::new(FileSystemRepository::new(root, Config::default())?);
            let out = service.execute(&files, options)?;

            let mut stdout = std::io::stdout().lock();
            stdout.write_all(out.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
        Commands::Last => {
            let service = NextEntryService::new(FileSystemRepository::discover()?);
            println!("{}", service.last()?);
            Ok(())
        }
        Commands::Next {
            descriptor,
            tags,
            edit,
        } => {
            let service = NextEntryService::new(FileSystemRepository::discover()?);
            let path = service.create(&descriptor, &tags)?;
            if let Some(name) = path.file_name() {
                println!("{}", name.to_string_lossy());
            }
            if edit {
                service.edit(&path)?;
            }
            Ok(())
        }
        Commands::Sort { source, key, write } => {
            let lines = filelist_from(source.as_deref())?;
            let sorted = SortKey::new(&read_filelist_file(&key)?).sort(&lines);
            if write {
                fs::write(&key, sorted)?;
                log::info!("sorted list written to {}", key.display());
            } else {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(sorted.as_bytes())?;
                stdout.flush()?;
            }
            Ok(())
        }
        Commands::Mv {
            filename,
            descriptor,
        } => {
            let service = MoveEntryService::new(FileSystemRepository::discover()?);
            println!("{}", service.execute(&filename, &descriptor)?);
            Ok(())
        }
    }
}
