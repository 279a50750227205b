//! Built-in decision scenarios.

use super::credit_model::{Scenario, ScenarioOption};

fn option(text: &str, impact: i32, explanation: &str) -> ScenarioOption {
    ScenarioOption {
        text: text.to_string(),
        impact,
        explanation: explanation.to_string(),
    }
}

fn scenario(id: &str, title: &str, description: &str, options: Vec<ScenarioOption>) -> Scenario {
    Scenario {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        options,
    }
}

/// Scenarios every new session starts with, in presentation order.
pub fn default_scenarios() -> Vec<Scenario> {
    vec![
        scenario(
            "1",
            "Oferta de Tarjeta de Crédito",
            "Recibes una oferta para una nueva tarjeta de crédito de una tienda departamental con un límite de 1,000. ¿La aceptas?",
            vec![
                option(
                    "Sí, la acepto",
                    -5,
                    "Abrir una nueva línea de crédito reduce la edad promedio de tus cuentas, lo que puede bajar tu puntaje a corto plazo.",
                ),
                option(
                    "No, la rechazo",
                    0,
                    "Rechazar la oferta no tiene impacto en tu puntaje. Es una decisión neutral.",
                ),
            ],
        ),
        scenario(
            "2",
            "Pago de la Tarjeta",
            "Llega el estado de cuenta de tu tarjeta. Debes 200. Tienes el dinero para pagar el total.",
            vec![
                option(
                    "Pagar el total (200)",
                    10,
                    "Pagar el total a tiempo es una de las mejores acciones para tu crédito. Demuestra responsabilidad.",
                ),
                option(
                    "Pagar solo el mínimo (20)",
                    -10,
                    "Pagar solo el mínimo aumenta tu utilización de crédito y genera intereses, lo cual es negativo.",
                ),
            ],
        ),
        scenario(
            "3",
            "Compra Grande",
            "Quieres comprar una nueva TV de 800. Tu límite de crédito total es de 1,000.",
            vec![
                option(
                    "Comprarla con la tarjeta",
                    -20,
                    "Esto elevaría tu utilización de crédito al 80%, una señal de alerta para los prestamistas.",
                ),
                option(
                    "Ahorrar y comprarla después",
                    5,
                    "Evitar deudas innecesarias y mantener baja la utilización de crédito es clave para un buen puntaje.",
                ),
            ],
        ),
        scenario(
            "4",
            "Revisar Reporte de Crédito",
            "Has escuchado que es bueno revisar tu reporte de crédito. ¿Lo haces?",
            vec![
                option(
                    "Sí, lo reviso",
                    2,
                    "Revisar tu propio reporte (soft inquiry) no daña tu puntaje y te ayuda a detectar errores.",
                ),
                option(
                    "No, me da miedo que baje",
                    0,
                    "No revisarlo no tiene impacto, pero pierdes la oportunidad de corregir posibles errores.",
                ),
            ],
        ),
    ]
}
