#![forbid(unsafe_code)]
use std::fs;
use std::io::{self, Read};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use planning::{Planner, RosterError};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste de planning de boutique (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Dérouler la démo intégrée (boutique « eScooters R Us »)
    Demo,

    /// Exécuter un script de commandes, une par ligne
    ///
    /// Lignes vides et lignes `#` ignorées. Commandes :
    ///   roster <nom de la boutique>
    ///   hours <Jour> <HH:MM> <HH:MM>
    ///   shift <Jour> <HH:MM> <HH:MM> <effectif minimum>
    ///   staff <Prénom> <Nom>
    ///   assign <Jour> <HH:MM> <HH:MM> <Prénom> <Nom> manager|worker
    ///   show staff|unassigned|no-manager|understaffed|overstaffed|week
    ///   show day <Jour> / show worker <Nom complet> / show manager <Nom complet>
    Run {
        /// Fichier script, ou `-` pour lire stdin
        script: String,
    },
}

enum Output {
    Done,
    Lines(Vec<String>),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let code = match cli.cmd {
        Commands::Demo => run_demo(),
        Commands::Run { script } => {
            let source = if script == "-" {
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .context("lecture de stdin")?;
                buffer
            } else {
                fs::read_to_string(&script).with_context(|| format!("lecture de {script}"))?
            };
            let mut planner = Planner::new();
            run_script(&mut planner, &source)
        }
    };

    std::process::exit(code);
}

fn run_script(planner: &mut Planner, source: &str) -> i32 {
    let mut rejected = 0usize;
    for raw in source.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        println!("> {line}");
        #[cfg(feature = "logging")]
        tracing::debug!(command = line, "exécution");
        match execute(planner, line) {
            Ok(Output::Done) => println!("ok"),
            Ok(Output::Lines(lines)) => {
                if lines.is_empty() {
                    println!("(aucun résultat)");
                } else {
                    for entry in lines {
                        println!("{entry}");
                    }
                }
            }
            Err(err) => {
                rejected += 1;
                println!("error: {err}");
            }
        }
    }
    #[cfg(feature = "logging")]
    tracing::info!(rejected, "script terminé");
    // Code 2 = WARNING : au moins une commande refusée
    if rejected > 0 {
        2
    } else {
        0
    }
}

fn execute(planner: &mut Planner, line: &str) -> Result<Output> {
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };
    let args: Vec<&str> = rest.split_whitespace().collect();

    match head {
        "roster" => {
            planner.new_roster(rest)?;
            Ok(Output::Done)
        }
        "hours" => match args.as_slice() {
            [day, start, end] => {
                planner.set_working_hours(day, start, end)?;
                Ok(Output::Done)
            }
            _ => bail!("usage : hours <Jour> <HH:MM> <HH:MM>"),
        },
        "shift" => match args.as_slice() {
            [day, start, end, min_workers] => {
                planner.add_shift(day, start, end, min_workers)?;
                Ok(Output::Done)
            }
            _ => bail!("usage : shift <Jour> <HH:MM> <HH:MM> <effectif minimum>"),
        },
        "staff" => match args.as_slice() {
            [given_name, family_name] => {
                planner.register_staff(given_name, family_name)?;
                Ok(Output::Done)
            }
            _ => bail!("usage : staff <Prénom> <Nom>"),
        },
        "assign" => match args.as_slice() {
            [day, start, end, given_name, family_name, role] => {
                let as_manager = match *role {
                    "manager" => true,
                    "worker" => false,
                    other => bail!("rôle inconnu : {other} (attendu manager|worker)"),
                };
                planner.assign_staff(day, start, end, given_name, family_name, as_manager)?;
                Ok(Output::Done)
            }
            _ => bail!("usage : assign <Jour> <HH:MM> <HH:MM> <Prénom> <Nom> manager|worker"),
        },
        "show" => show(planner, &args),
        other => bail!("commande inconnue : {other}"),
    }
}

fn show(planner: &Planner, args: &[&str]) -> Result<Output> {
    let lines = match args {
        ["staff"] => planner.registered_staff()?,
        ["unassigned"] => planner.unassigned_staff()?,
        ["no-manager"] => planner.shifts_without_manager()?,
        ["understaffed"] => planner.understaffed_shifts()?,
        ["overstaffed"] => planner.overstaffed_shifts()?,
        ["week"] => planner.full_week()?,
        ["day", day] => planner.roster_for_day(day)?,
        ["worker", name @ ..] if !name.is_empty() => planner.shifts_for_worker(&name.join(" "))?,
        ["manager", name @ ..] if !name.is_empty() => planner.shifts_managed_by(&name.join(" "))?,
        _ => bail!(
            "usage : show staff|unassigned|no-manager|understaffed|overstaffed|week, \
             show day <Jour>, show worker <Nom complet>, show manager <Nom complet>"
        ),
    };
    Ok(Output::Lines(lines))
}

fn run_demo() -> i32 {
    let mut planner = Planner::new();

    println!(">> Démo : planning d'une nouvelle boutique");
    println!(">> Heures d'ouverture avant toute création de planning");
    status(planner.set_working_hours("Monday", "09:00", "17:00"));

    println!(">> Création du planning « eScooters R Us » (statut {{}} = succès)");
    status(planner.new_roster("eScooters R Us"));

    println!(">> Heures d'ouverture du lundi : 09:00-17:00");
    status(planner.set_working_hours("Monday", "09:00", "17:00"));

    println!(">> Créneau 09:00-12:00 le lundi");
    status(planner.add_shift("Monday", "09:00", "12:00", "0"));

    println!(">> Créneau 12:00-13:00 le lundi, minimum 1 équipier");
    status(planner.add_shift("Monday", "12:00", "13:00", "1"));

    println!(">> Enregistrement de Bayta Darell");
    status(planner.register_staff("Bayta", "Darell"));

    println!(">> Enregistrement de Hari Sheldon");
    status(planner.register_staff("Hari", "Sheldon"));

    println!(">> Bayta Darell responsable du lundi 09:00-12:00");
    status(planner.assign_staff("Monday", "09:00", "12:00", "Bayta", "Darell", true));

    println!(">> Hari Sheldon équipier du lundi 12:00-13:00");
    status(planner.assign_staff("Monday", "12:00", "13:00", "Hari", "Sheldon", false));

    println!(">> Semaine complète");
    print_week(&planner);

    println!(">> Nouveau planning « Socks for Everyone » : l'ancien est remplacé");
    status(planner.new_roster("Socks for Everyone"));
    println!(">> Semaine complète, vide après le remplacement");
    print_week(&planner);

    println!(">> Fin de la démo");
    0
}

fn status(result: Result<(), RosterError>) {
    match result {
        Ok(()) => println!("\tstatut {{}}"),
        Err(err) => println!("\tstatut {{{err}}}"),
    }
}

fn print_week(planner: &Planner) {
    match planner.full_week() {
        Ok(lines) if lines.is_empty() => println!("(planning vide)"),
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
        }
        Err(err) => println!("error: {err}"),
    }
}
