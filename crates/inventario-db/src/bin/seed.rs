//! # Seed Data Generator
//!
//! Populates a database with sample inventory data for development.
//!
//! ## Usage
//! ```bash
//! # Seed ./inventario_dev.db with the default amounts
//! cargo run -p inventario-db --bin seed
//!
//! # Custom database path and order count
//! cargo run -p inventario-db --bin seed -- --db ./data/inventario.db --orders 50
//! ```
//!
//! ## Generated Data
//! - Proveedores and Clientes from fixed name lists
//! - Productos with costs, sale prices and stock
//! - Purchase and sales orders spread over the last months, each with
//!   one to three line items
//!
//! Seeding is skipped when the database already has productos.

use chrono::{Duration, NaiveDate};
use std::env;

use inventario_core::{
    EstadoOrden, Money, NuevaOrdenCompra, NuevaOrdenVenta, NuevoContacto,
    NuevoDetalleOrdenCompra, NuevoDetalleOrdenVenta, NuevoProducto,
};
use inventario_db::{Database, DbConfig};

const PROVEEDORES: &[&str] = &[
    "Distribuidora del Norte",
    "Importadora Pacifico",
    "Comercial Andina",
    "Suministros Delta",
];

const CLIENTES: &[&str] = &[
    "Ferreteria El Martillo",
    "Abarrotes Lupita",
    "Papeleria Central",
    "Tienda La Esquina",
    "Minisuper Sol",
];

/// (nombre, costo en centavos)
const PRODUCTOS: &[(&str, i64)] = &[
    ("Tornillo 1/4", 35),
    ("Martillo de una", 8900),
    ("Cinta aislante", 1250),
    ("Cuaderno profesional", 2800),
    ("Boligrafo azul", 450),
    ("Arroz 1kg", 2100),
    ("Aceite 1L", 3900),
    ("Jabon de barra", 1500),
    ("Foco LED 9W", 4200),
    ("Pila AA", 1100),
];

const ESTADOS: &[EstadoOrden] = &[
    EstadoOrden::Completado,
    EstadoOrden::Pendiente,
    EstadoOrden::Cancelado,
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut orders: usize = 20;
    let mut db_path = String::from("./inventario_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--orders" | "-o" => {
                if i + 1 < args.len() {
                    orders = args[i + 1].parse().unwrap_or(20);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Inventario Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -o, --orders <N>   Orders of each kind to generate (default: 20)");
                println!("  -d, --db <PATH>    Database file path (default: ./inventario_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Inventario Seed Data Generator");
    println!("==============================");
    println!("Database: {}", db_path);
    println!("Orders:   {} purchase + {} sales", orders, orders);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;
    println!("✓ Connected to database, migrations applied");

    let existing = db.productos().list().await?.len();
    if existing > 0 {
        println!("⚠ Database already has {} productos", existing);
        println!("  Skipping seed to avoid duplicates.");
        return Ok(());
    }

    let mut proveedores = Vec::new();
    for nombre in PROVEEDORES {
        proveedores.push(db.proveedores().insert(&contacto(nombre)).await?.id);
    }

    let mut clientes = Vec::new();
    for nombre in CLIENTES {
        clientes.push(db.clientes().insert(&contacto(nombre)).await?.id);
    }

    let mut productos = Vec::new();
    for (idx, (nombre, costo)) in PRODUCTOS.iter().enumerate() {
        let producto = NuevoProducto {
            nombre: Some(nombre.to_string()),
            costo: Some(Money::from_cents(*costo)),
            // 30-50% markup
            precio_venta: Some(Money::from_cents(costo * (130 + (idx as i64 * 7) % 21) / 100)),
            cantidad: Some(((idx * 37) % 200) as i64),
        };
        productos.push(db.productos().insert(&producto).await?.id);
    }

    println!(
        "✓ {} proveedores, {} clientes, {} productos",
        proveedores.len(),
        clientes.len(),
        productos.len()
    );

    let base = NaiveDate::from_ymd_opt(2024, 1, 1).ok_or("invalid base date")?;
    let mut lines = 0;

    for seed in 0..orders {
        let (fecha_inicio, fecha_final) = fechas(base, seed);
        let estado = ESTADOS[seed % ESTADOS.len()];

        let compra = db
            .ordenes_compra()
            .insert(&NuevaOrdenCompra {
                fecha_inicio,
                fecha_final,
                estado,
                id_proveedor: proveedores[seed % proveedores.len()],
            })
            .await?;

        let venta = db
            .ordenes_venta()
            .insert(&NuevaOrdenVenta {
                fecha_inicio,
                fecha_final,
                estado,
                id_cliente: clientes[seed % clientes.len()],
            })
            .await?;

        for item in 0..(1 + seed % 3) {
            let id_producto = productos[(seed * 3 + item) % productos.len()];
            let cantidad = 1 + ((seed + item) % 12) as i64;

            db.detalles_compra()
                .insert(&NuevoDetalleOrdenCompra {
                    id_orden_compra: compra.id,
                    id_producto,
                    cantidad: cantidad * 10,
                })
                .await?;
            db.detalles_venta()
                .insert(&NuevoDetalleOrdenVenta {
                    id_orden_venta: venta.id,
                    id_producto,
                    cantidad,
                })
                .await?;
            lines += 2;
        }
    }

    println!("✓ {} orders with {} line items", orders * 2, lines);
    println!();
    println!("✓ Seed complete!");

    Ok(())
}

fn contacto(nombre: &str) -> NuevoContacto {
    let slug: String = nombre
        .split_whitespace()
        .next()
        .unwrap_or(nombre)
        .to_lowercase();

    NuevoContacto {
        nombre: nombre.to_string(),
        contacto: format!("ventas@{}.example", slug),
        telefono: format!("55-{:04}-{:04}", nombre.len() * 131, nombre.len() * 17),
        direccion: format!("Calle {} #{}", slug, nombre.len()),
    }
}

/// Start/end dates for the nth order. The end never precedes the start.
fn fechas(base: NaiveDate, seed: usize) -> (NaiveDate, NaiveDate) {
    let inicio = base + Duration::days((seed * 5) as i64);
    let fin = inicio + Duration::days((seed % 15) as i64);
    (inicio, fin)
}
