// Build-Script: Wird vor dem Kompilieren ausgeführt
// Liefert die Lauflicht-Attribute und konfiguriert den Linker für ESP32-C6

/// Attribute, die aus der Umgebung (bzw. .env) in die Firmware eingebacken werden
const ATTRIBUTES: [&str; 2] = ["LED_PINS", "TIMER_INTERVAL"];

fn main() {
    // Lade .env file für die Lauflicht-Attribute
    // Fehler ignorieren wenn .env nicht existiert (dann müssen ENV vars gesetzt sein)
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("⚠️  .env file nicht gefunden: {}", e);
        eprintln!("   Setze LED_PINS (und optional TIMER_INTERVAL) als Environment-Variablen");
    }

    // Gebe die Attribute an den Rust-Compiler weiter (option_env! in config.rs)
    // Fehlt LED_PINS, bricht die Firmware erst beim Start ab
    for name in ATTRIBUTES {
        println!("cargo:rerun-if-env-changed={}", name);
        if let Ok(value) = std::env::var(name) {
            println!("cargo:rustc-env={}={}", name, value);
        }
    }
    println!("cargo:rerun-if-changed=.env");

    // Registriere hilfsbereiten Error-Handler für Linker-Fehler
    linker_be_nice();

    // Füge Linker-Skripte hinzu:

    // 1. defmt.x - defmt Logging-Support
    println!("cargo:rustc-link-arg=-Tdefmt.x");

    // 2. linkall.x - ESP32 Memory-Layout, muss als LETZTES kommen
    println!("cargo:rustc-link-arg=-Tlinkall.x");
}

// Error-Handler: Zeigt hilfreiche Tipps bei Linker-Fehlern
// Wird vom Linker als "--error-handling-script" aufgerufen
fn linker_be_nice() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 2 {
        let kind = &args[1]; // Fehler-Typ (z.B. "undefined-symbol")
        let what = &args[2]; // Symbol-Name (z.B. "_defmt_...")

        match kind.as_str() {
            "undefined-symbol" => {
                if what.starts_with("_defmt_") {
                    eprintln!();
                    eprintln!(
                        "💡 `defmt` not found - make sure `defmt.x` is added as a linker script"
                    );
                    eprintln!();
                } else if what == "_stack_start" {
                    eprintln!();
                    eprintln!("💡 Is the linker script `linkall.x` missing?");
                    eprintln!();
                } else if what.starts_with("esp_rtos_") {
                    eprintln!();
                    eprintln!("💡 `esp-rtos` is not started - call `esp_rtos::start` in main");
                    eprintln!();
                }
            }
            _ => std::process::exit(1),
        }

        std::process::exit(0);
    }

    match std::env::current_exe() {
        Ok(exe) => println!(
            "cargo:rustc-link-arg=--error-handling-script={}",
            exe.display()
        ),
        Err(e) => eprintln!("⚠️  Linker error handler not registered: {}", e),
    }
}
