use palabritas_core::VocabWord;

fn word(id: &str, spanish: &str, dutch: &str, category: &str, difficulty: u8, emoji: &str) -> VocabWord {
    let mut w = VocabWord::new(id, spanish, dutch, category, difficulty);
    w.emoji = Some(emoji.to_string());
    w
}

/// Built-in starter list: greetings, numbers, animals, and colors.
pub fn starter_words() -> Vec<VocabWord> {
    vec![
        // Saludos
        word("greet_1", "hola", "hallo", "saludos", 1, "👋"),
        word("greet_2", "adiós", "dag", "saludos", 1, "👋"),
        word("greet_3", "buenos días", "goedemorgen", "saludos", 2, "🌅"),
        word("greet_4", "buenas tardes", "goedemiddag", "saludos", 2, "🌤️"),
        word("greet_5", "buenas noches", "goedenavond", "saludos", 2, "🌙"),
        word("greet_6", "gracias", "dank je", "saludos", 1, "🙏"),
        word("greet_7", "por favor", "alsjeblieft", "saludos", 2, "🤲"),
        word("greet_8", "perdón", "sorry", "saludos", 1, "😅"),
        word("greet_9", "sí", "ja", "saludos", 1, "✅"),
        word("greet_10", "no", "nee", "saludos", 1, "❌"),
        // Números
        word("num_1", "uno", "een", "numeros", 1, "1️⃣"),
        word("num_2", "dos", "twee", "numeros", 1, "2️⃣"),
        word("num_3", "tres", "drie", "numeros", 1, "3️⃣"),
        word("num_4", "cuatro", "vier", "numeros", 1, "4️⃣"),
        word("num_5", "cinco", "vijf", "numeros", 1, "5️⃣"),
        word("num_6", "seis", "zes", "numeros", 1, "6️⃣"),
        word("num_7", "siete", "zeven", "numeros", 1, "7️⃣"),
        word("num_8", "ocho", "acht", "numeros", 1, "8️⃣"),
        word("num_9", "nueve", "negen", "numeros", 1, "9️⃣"),
        word("num_10", "diez", "tien", "numeros", 1, "🔟"),
        // Animales
        word("animal_1", "gato", "kat", "animales", 1, "🐱"),
        word("animal_2", "perro", "hond", "animales", 1, "🐶"),
        word("animal_3", "pájaro", "vogel", "animales", 2, "🐦"),
        word("animal_4", "pez", "vis", "animales", 1, "🐟"),
        word("animal_5", "caballo", "paard", "animales", 2, "🐴"),
        word("animal_6", "vaca", "koe", "animales", 1, "🐄"),
        word("animal_7", "conejo", "konijn", "animales", 2, "🐰"),
        word("animal_8", "ratón", "muis", "animales", 2, "🐭"),
        word("animal_9", "león", "leeuw", "animales", 2, "🦁"),
        word("animal_10", "mariposa", "vlinder", "animales", 3, "🦋"),
        // Colores
        word("color_1", "rojo", "rood", "colores", 1, "🔴"),
        word("color_2", "azul", "blauw", "colores", 1, "🔵"),
        word("color_3", "verde", "groen", "colores", 1, "🟢"),
        word("color_4", "amarillo", "geel", "colores", 2, "🟡"),
        word("color_5", "naranja", "oranje", "colores", 2, "🟠"),
        word("color_6", "morado", "paars", "colores", 2, "🟣"),
        word("color_7", "negro", "zwart", "colores", 1, "⚫"),
        word("color_8", "blanco", "wit", "colores", 1, "⚪"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn starter_ids_are_unique_and_valid() {
        let words = starter_words();
        let ids: HashSet<&String> = words.iter().map(|w| &w.id).collect();
        assert_eq!(ids.len(), words.len());
        for w in &words {
            palabritas_core::repo::validate_word(w).unwrap();
        }
    }
}
