//! Built-in lesson catalog.

use super::lessons_model::{Lesson, LessonCategory, LessonStep, QuizOption, QuizQuestion};

fn step(title: &str, content: &str) -> LessonStep {
    LessonStep {
        title: title.to_string(),
        content: content.to_string(),
    }
}

/// A question whose options are given as `(text, is_correct)`.
fn question(text: &str, options: &[(&str, bool)], explanation: &str) -> QuizQuestion {
    QuizQuestion {
        question: text.to_string(),
        options: options
            .iter()
            .map(|(text, is_correct)| QuizOption {
                text: text.to_string(),
                is_correct: *is_correct,
            })
            .collect(),
        explanation: explanation.to_string(),
    }
}

pub fn default_lessons() -> Vec<Lesson> {
    vec![
        Lesson {
            id: "1".to_string(),
            title: "Entendiendo tu Puntaje".to_string(),
            description: "Descubre qué factores componen tu puntaje de crédito.".to_string(),
            category: LessonCategory::CreditBasics,
            duration: 5,
            is_premium: false,
            steps: vec![
                step(
                    "¿Qué es el Puntaje?",
                    "Tu puntaje de crédito es un número entre 300 y 850 que representa tu confiabilidad para pagar deudas. Un número más alto significa menor riesgo para los prestamistas.",
                ),
                step(
                    "Factores Clave",
                    "Los factores más importantes son: historial de pagos (35%), monto de la deuda (30%), duración del historial (15%), nuevos créditos (10%) y tipos de crédito (10%).",
                ),
            ],
            quiz: vec![
                question(
                    "¿Cuál es el factor más importante para tu puntaje de crédito?",
                    &[
                        ("La cantidad de tarjetas que tienes", false),
                        ("Tu historial de pagos a tiempo", true),
                        ("Tu edad", false),
                    ],
                    "El historial de pagos es el componente más pesado (35%), demostrando tu consistencia y fiabilidad.",
                ),
                question(
                    "Un puntaje de crédito más alto generalmente significa...",
                    &[
                        ("Mayor riesgo para los prestamistas", false),
                        ("Menor riesgo y mejores tasas de interés", true),
                        ("Que tienes muchas deudas", false),
                    ],
                    "Un puntaje alto te califica como un prestatario de bajo riesgo, lo que te da acceso a mejores condiciones y tasas de interés más bajas.",
                ),
                question(
                    "¿Qué es la \"utilización de crédito\"?",
                    &[
                        ("El total de dinero que has gastado en tu vida", false),
                        ("El porcentaje de tu crédito disponible que estás usando", true),
                        ("La cantidad de tiempo que llevas usando crédito", false),
                    ],
                    "Mantener una utilización baja (idealmente menos del 30%) es crucial, ya que una alta utilización sugiere riesgo financiero a los prestamistas.",
                ),
            ],
        },
        Lesson {
            id: "2".to_string(),
            title: "El Peligro del Pago Mínimo".to_string(),
            description: "Por qué pagar solo el mínimo puede ser una trampa de deuda.".to_string(),
            category: LessonCategory::ManagingDebt,
            duration: 7,
            is_premium: false,
            steps: vec![
                step(
                    "¿Qué es el Pago Mínimo?",
                    "Es la cantidad más pequeña que el banco te exige pagar para mantener tu cuenta al día. Generalmente es un pequeño porcentaje de tu deuda total.",
                ),
                step(
                    "La Trampa de Intereses",
                    "Al pagar solo el mínimo, el resto de tu deuda acumula intereses. Esto puede hacer que tardes años en pagar una compra pequeña y termines pagando mucho más de su valor original.",
                ),
            ],
            quiz: vec![
                question(
                    "¿Qué sucede si solo realizas el pago mínimo de tu tarjeta de crédito cada mes?",
                    &[
                        ("Tu deuda se paga rápidamente", false),
                        ("Tu puntaje de crédito mejora mucho", false),
                        ("La deuda crece por los intereses y tardas más en pagarla", true),
                    ],
                    "Pagar solo el mínimo hace que la mayor parte de tu pago se vaya a intereses, no al capital, alargando la deuda.",
                ),
                question(
                    "Pagar más del mínimo en tu tarjeta de crédito...",
                    &[
                        ("No tiene ningún efecto en tu puntaje.", false),
                        ("Puede ayudar a reducir tu deuda más rápido y mejorar tu utilización.", true),
                        ("Es penalizado por los bancos.", false),
                    ],
                    "Pagar más del mínimo reduce el capital de tu deuda, lo que disminuye los intereses futuros y mejora tu ratio de utilización de crédito.",
                ),
                question(
                    "Si tienes una deuda de 1000 con un interés del 20% anual y solo pagas el mínimo, ¿cuánto podrías terminar pagando?",
                    &[
                        ("Exactamente 1000.", false),
                        ("Un poco más de 1000.", false),
                        ("Mucho más de 1000, posiblemente el doble o más.", true),
                    ],
                    "Debido al interés compuesto, pagar solo el mínimo puede hacer que termines pagando una cantidad significativamente mayor al monto original de la deuda a lo largo del tiempo.",
                ),
            ],
        },
        Lesson {
            id: "3".to_string(),
            title: "Inversiones para Principiantes".to_string(),
            description: "Conceptos básicos para empezar a invertir tu dinero.".to_string(),
            category: LessonCategory::BuildingCredit,
            duration: 12,
            is_premium: true,
            steps: vec![
                step(
                    "¿Por qué Invertir?",
                    "Invertir es poner tu dinero a trabajar para que genere más dinero. Ayuda a combatir la inflación y a alcanzar metas financieras a largo plazo como la jubilación.",
                ),
                step(
                    "Tipos de Inversión",
                    "Existen diferentes opciones como acciones, bonos, fondos mutuos y bienes raíces. Cada uno tiene un nivel de riesgo y rendimiento distinto. Es clave diversificar.",
                ),
                step(
                    "Empezando con Poco",
                    "No necesitas ser millonario para invertir. Puedes empezar con pequeñas cantidades en aplicaciones de micro-inversión o fondos de bajo costo.",
                ),
            ],
            quiz: vec![question(
                "¿Cuál es el principal objetivo de invertir?",
                &[
                    ("Gastar dinero rápidamente", false),
                    ("Hacer que tu dinero crezca con el tiempo", true),
                    ("Guardar dinero bajo el colchón", false),
                ],
                "Invertir busca generar rendimientos a lo largo del tiempo, superando la inflación y aumentando tu patrimonio.",
            )],
        },
    ]
}
