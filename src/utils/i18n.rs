// ============================================================================
// MÓDULO DE INTERNACIONALIZACIÓN
// ============================================================================

use std::collections::HashMap;

/// Idiomas soportados (EN por defecto)
pub const SUPPORTED_LANGUAGES: &[&str] = &["EN", "ES", "FR"];

/// Obtener diccionario de traducciones para un idioma
fn get_translations(lang: &str) -> HashMap<&'static str, &'static str> {
    let mut translations = HashMap::new();
    let lang_upper = lang.to_uppercase();

    match lang_upper.as_str() {
        "ES" => {
            // Header
            translations.insert("app_title", "Mapper");
            translations.insert("tagline", "Extrae lugares de cualquier artículo y míralos en un mapa. Ideal para guías de viaje, listas de restaurantes y recomendaciones de atracciones.");

            // Input
            translations.insert("url_label", "URL del artículo (Próximamente)");
            translations.insert("test_sample", "Probar ejemplo");
            translations.insert("loading", "Cargando...");
            translations.insert("my_location", "Mi ubicación");
            translations.insert("next_step", "Siguiente paso:");
            translations.insert("add_api_key", "¡Agrega tu API key de Google Maps para ver el mapa!");

            // Mapa
            translations.insert("waiting_api_key", "Esperando API key...");
            translations.insert("loading_maps", "Cargando Google Maps...");
            translations.insert("found_place", "Se encontró {} lugar:");
            translations.insert("found_places", "Se encontraron {} lugares:");
            translations.insert("your_location", "Tu ubicación");

            // Errores
            translations.insert("error_api_key_missing", "API key de Google Maps no configurada");
            translations.insert("error_sdk_load", "No se pudo cargar Google Maps");
            translations.insert("error_geolocation_unsupported", "Este navegador no soporta geolocalización");
            translations.insert("error_geolocation", "No se pudo obtener tu ubicación");
            translations.insert("error_sample", "No se pudieron cargar los lugares de ejemplo");
        }
        "FR" => {
            // Header
            translations.insert("app_title", "Mapper");
            translations.insert("tagline", "Extrayez les lieux de n'importe quel article et voyez-les sur une carte. Parfait pour les guides de voyage, les listes de restaurants et les recommandations d'attractions.");

            // Input
            translations.insert("url_label", "URL de l'article (Bientôt disponible)");
            translations.insert("test_sample", "Tester l'exemple");
            translations.insert("loading", "Chargement...");
            translations.insert("my_location", "Ma position");
            translations.insert("next_step", "Étape suivante :");
            translations.insert("add_api_key", "Ajoutez votre clé API Google Maps pour voir la carte !");

            // Carte
            translations.insert("waiting_api_key", "En attente de la clé API...");
            translations.insert("loading_maps", "Chargement de Google Maps...");
            translations.insert("found_place", "{} lieu trouvé :");
            translations.insert("found_places", "{} lieux trouvés :");
            translations.insert("your_location", "Votre position");

            // Erreurs
            translations.insert("error_api_key_missing", "Clé API Google Maps non configurée");
            translations.insert("error_sdk_load", "Impossible de charger Google Maps");
            translations.insert("error_geolocation_unsupported", "La géolocalisation n'est pas supportée par ce navigateur");
            translations.insert("error_geolocation", "Impossible d'obtenir votre position");
            translations.insert("error_sample", "Impossible de charger les lieux d'exemple");
        }
        _ => {
            // Header
            translations.insert("app_title", "Mapper");
            translations.insert("tagline", "Extract places from any article and see them on a map. Perfect for travel guides, restaurant lists, and attraction recommendations.");

            // Input
            translations.insert("url_label", "Article URL (Coming Soon)");
            translations.insert("test_sample", "Test Sample");
            translations.insert("loading", "Loading...");
            translations.insert("my_location", "My Location");
            translations.insert("next_step", "Next Step:");
            translations.insert("add_api_key", "Add your Google Maps API key to see the map!");

            // Map
            translations.insert("waiting_api_key", "Waiting for API key...");
            translations.insert("loading_maps", "Loading Google Maps...");
            translations.insert("found_place", "Found {} place:");
            translations.insert("found_places", "Found {} places:");
            translations.insert("your_location", "Your Location");

            // Errors
            translations.insert("error_api_key_missing", "Google Maps API key not configured");
            translations.insert("error_sdk_load", "Failed to load Google Maps");
            translations.insert("error_geolocation_unsupported", "Geolocation is not supported by this browser");
            translations.insert("error_geolocation", "Unable to get your location");
            translations.insert("error_sample", "Failed to load sample places");
        }
    }

    translations
}

/// Función de traducción
///
/// Devuelve la clave si no se encuentra traducción
pub fn t(key: &str, lang: &str) -> String {
    let translations = get_translations(lang);

    if let Some(translation) = translations.get(key) {
        return translation.to_string();
    }

    key.to_string()
}

/// "Found 1 place:" / "Found 3 places:"
pub fn found_places_label(count: usize, lang: &str) -> String {
    let key = if count == 1 { "found_place" } else { "found_places" };
    t(key, lang).replacen("{}", &count.to_string(), 1)
}

/// Elegir idioma: configuración explícita, luego `navigator.language`, luego EN
pub fn resolve_language(configured: Option<&str>, navigator_language: Option<&str>) -> &'static str {
    let pick = |value: &str| {
        let prefix: String = value.chars().take(2).collect::<String>().to_uppercase();
        SUPPORTED_LANGUAGES.iter().copied().find(|lang| *lang == prefix)
    };

    configured
        .and_then(pick)
        .or_else(|| navigator_language.and_then(pick))
        .unwrap_or("EN")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_language_has_the_same_keys() {
        let mut english: Vec<_> = get_translations("EN").into_keys().collect();
        english.sort();
        for lang in SUPPORTED_LANGUAGES {
            let mut keys: Vec<_> = get_translations(lang).into_keys().collect();
            keys.sort();
            assert_eq!(keys, english, "claves distintas para {}", lang);
        }
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        assert_eq!(t("no_existe", "EN"), "no_existe");
    }

    #[test]
    fn test_found_places_pluralization() {
        assert_eq!(found_places_label(1, "EN"), "Found 1 place:");
        assert_eq!(found_places_label(3, "EN"), "Found 3 places:");
        assert_eq!(found_places_label(2, "FR"), "2 lieux trouvés :");
    }

    #[test]
    fn test_resolve_language() {
        assert_eq!(resolve_language(Some("es"), Some("fr-FR")), "ES");
        assert_eq!(resolve_language(None, Some("fr-FR")), "FR");
        assert_eq!(resolve_language(Some("de"), Some("pt-BR")), "EN");
        assert_eq!(resolve_language(None, None), "EN");
    }
}
