use customers::{CustomerController, CustomerCreation, CustomerDeletion, CustomerRepository, CustomerUpdate, CustomersConfig, IdAllocator,
                InMemoryCustomerRepository, Reply, UserId};
use serde_json::json;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

/// Pequeño menú interactivo para administrar clientes sobre el repositorio
/// en memoria.
///
/// Opciones soportadas:
/// 1) Ver clientes
/// 2) Crear cliente
/// 3) Renombrar cliente
/// 4) Borrar cliente
/// 5) Salir
#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // `.env` antes del logger para que RUST_LOG pueda venir de ahí
    dotenvy::dotenv().ok();
    env_logger::Builder::new().filter_level(log::LevelFilter::Info)
                              .parse_default_env()
                              .init();

    let config = CustomersConfig::from_env()?;
    log::info!("política de ids: {:?} (semilla: {:?})", config.policy, config.seed);

    let repo = Arc::new(InMemoryCustomerRepository::new());
    let allocator = IdAllocator::new(config.id_generator(), config.policy);
    let controller = CustomerController::new(CustomerCreation::new(repo.clone(), allocator),
                                             CustomerUpdate::new(repo.clone()),
                                             CustomerDeletion::new(repo.clone()));
    let session = UserId::new("cli")?;

    loop {
        println!("\n== Customers CLI menu ==");
        println!("1) Ver clientes");
        println!("2) Crear cliente");
        println!("3) Renombrar cliente");
        println!("4) Borrar cliente");
        println!("5) Salir");
        print!("Elige una opción: ");
        io::stdout().flush().ok();

        let Some(choice) = read_input(&mut io::stdin().lock())? else {
            println!("\nEntrada cerrada, saliendo...");
            break;
        };
        match choice.trim() {
            "1" => match repo.list().await {
                Ok(customers) => {
                    println!("\nID         | BORRADO | NOMBRE");
                    println!("---------------------------------------------");
                    for c in customers {
                        println!("{:<10} | {:<7} | {}", c.id, if c.deleted { "sí" } else { "no" }, c.name);
                    }
                }
                Err(e) => eprintln!("Error listando clientes: {}", e),
            },
            "2" => {
                let name = prompt("Nombre: ")?;
                show(controller.create(Some(&session), &json!({ "name": name.trim() })).await);
            }
            "3" => {
                let id = prompt("Id del cliente: ")?;
                let name = prompt("Nuevo nombre (enter para no cambiarlo): ")?;
                let body = if name.trim().is_empty() { json!({}) } else { json!({ "name": name.trim() }) };
                show(controller.update(Some(&session), id.trim(), &body).await);
            }
            "4" => {
                let id = prompt("Id del cliente a borrar: ")?;
                let confirm = prompt(&format!("Confirma borrado de {}? escribir 'yes' para confirmar: ", id.trim()))?;
                if confirm.trim().to_lowercase() == "yes" {
                    show(controller.delete(Some(&session), id.trim()).await);
                } else {
                    println!("Borrado cancelado");
                }
            }
            "5" => {
                println!("Saliendo...");
                break;
            }
            other => {
                println!("Opción inválida: {}", other);
            }
        }
    }

    Ok(())
}

fn show(reply: Reply) {
    if reply.body.is_null() {
        println!("[{}]", reply.status);
    } else {
        println!("[{}] {}", reply.status, reply.body);
    }
}

/// Lee una línea de `input`. `None` indica fin de la entrada.
fn read_input(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut s = String::new();
    if input.read_line(&mut s)? == 0 {
        return Ok(None);
    }
    Ok(Some(s))
}

fn prompt(msg: &str) -> io::Result<String> {
    prompt_from(&mut io::stdin().lock(), msg)
}

fn prompt_from(input: &mut impl BufRead, msg: &str) -> io::Result<String> {
    print!("{}", msg);
    io::stdout().flush()?;
    read_input(input)?.ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "entrada cerrada"))
}
