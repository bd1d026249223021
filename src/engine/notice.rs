use chrono::Utc;

use crate::entities::{BookingRequest, TripType};

/// Renders the operator-facing booking notice: client identity and address,
/// travel details, one section per leg the trip type requires, and the
/// price breakdown. The operator side runs in French.
pub fn render(booking: &BookingRequest, total_price: f64) -> String {
    let trip_type = booking.trip_type.unwrap_or(TripType::Outbound);

    let price_per_trip = if trip_type.is_round_trip() {
        total_price / 2.0
    } else {
        total_price
    };

    let mut body = String::new();

    body.push_str(
        "<html>\
         <head>\
         <style>\
         body { font-family: Arial, sans-serif; line-height: 1.6; color: #333; }\
         .container { max-width: 600px; margin: 0 auto; }\
         .header { background-color: #6b46c1; color: white; padding: 20px; text-align: center; }\
         .section { margin-bottom: 25px; }\
         .section-title { color: #6b46c1; border-bottom: 1px solid #eee; font-size: 18px; }\
         .label { font-weight: bold; }\
         .total-price { font-size: 18px; font-weight: bold; color: #6b46c1; }\
         </style>\
         </head>\
         <body><div class=\"container\">\
         <div class=\"header\"><h1>Nouvelle Réservation de Navette</h1></div>\
         <div class=\"content\">",
    );

    body.push_str(&format!(
        "<div class=\"section\">\
         <h2 class=\"section-title\">Informations du client</h2>\
         <div><span class=\"label\">Nom complet:</span> {} {}</div>\
         <div><span class=\"label\">Email:</span> {}</div>\
         <div><span class=\"label\">Téléphone:</span> {}</div>\
         <div><span class=\"label\">Adresse:</span> {} {}</div>\
         <div><span class=\"label\">Code postal:</span> {}</div>\
         <div><span class=\"label\">Ville:</span> {}</div>\
         </div>",
        text(&booking.first_name),
        text(&booking.last_name),
        text(&booking.email),
        text(&booking.phone),
        text(&booking.street),
        text(&booking.house_number),
        text(&booking.postal_code),
        text(&booking.city),
    ));

    body.push_str(&format!(
        "<div class=\"section\">\
         <h2 class=\"section-title\">Détails du voyage</h2>\
         <div><span class=\"label\">Type de trajet:</span> {}</div>\
         <div><span class=\"label\">Destination:</span> {}</div>\
         <div><span class=\"label\">Nombre de passagers:</span> {}</div>\
         <div><span class=\"label\">Nombre de bagages:</span> {}</div>",
        trip_type_text(trip_type),
        text(&booking.airport),
        booking.passengers.unwrap_or_default(),
        booking.luggage,
    ));

    if booking.child_seats > 0 {
        body.push_str(&format!(
            "<div><span class=\"label\">Sièges enfant:</span> {}</div>",
            booking.child_seats
        ));
    }

    if booking.boosters > 0 {
        body.push_str(&format!(
            "<div><span class=\"label\">Réhausseurs:</span> {}</div>",
            booking.boosters
        ));
    }

    if let Some(remarks) = booking.remarks.as_deref().filter(|r| !r.trim().is_empty()) {
        body.push_str(&format!(
            "<div><span class=\"label\">Remarques:</span> {}</div>",
            remarks
        ));
    }

    body.push_str("</div>");

    if trip_type.has_outbound_leg() {
        body.push_str(&format!(
            "<div class=\"section\">\
             <h2 class=\"section-title\">Détails du trajet aller</h2>\
             <div><span class=\"label\">Date de départ:</span> {}</div>\
             <div><span class=\"label\">Heure de départ:</span> {}</div>\
             </div>",
            text(&booking.departure_date),
            text(&booking.departure_time),
        ));
    }

    if trip_type.has_inbound_leg() {
        body.push_str(&format!(
            "<div class=\"section\">\
             <h2 class=\"section-title\">Détails du trajet retour</h2>\
             <div><span class=\"label\">Date d'arrivée:</span> {}</div>\
             <div><span class=\"label\">Heure d'arrivée:</span> {}</div>\
             <div><span class=\"label\">Numéro de vol:</span> {}</div>",
            text(&booking.arrival_date),
            text(&booking.arrival_time),
            text(&booking.flight_number),
        ));

        if let Some(origin) = booking.flight_origin.as_deref().filter(|o| !o.is_empty()) {
            body.push_str(&format!(
                "<div><span class=\"label\">Provenance:</span> {}</div>",
                origin
            ));
        }

        body.push_str("</div>");
    }

    body.push_str("<div class=\"section\"><h2 class=\"section-title\">Tarification</h2>");

    match trip_type {
        TripType::RoundTrip => {
            body.push_str(&format!(
                "<div><span class=\"label\">Trajet aller:</span> {:.2}€</div>\
                 <div><span class=\"label\">Trajet retour:</span> {:.2}€</div>",
                price_per_trip, price_per_trip
            ));
        }
        TripType::Outbound => {
            body.push_str(&format!(
                "<div><span class=\"label\">Trajet aller:</span> {:.2}€</div>",
                price_per_trip
            ));
        }
        TripType::Inbound => {
            body.push_str(&format!(
                "<div><span class=\"label\">Trajet retour:</span> {:.2}€</div>",
                price_per_trip
            ));
        }
    }

    body.push_str(&format!(
        "<div class=\"total-price\">Prix total: {:.2}€</div></div>",
        total_price
    ));

    body.push_str(&format!(
        "<div class=\"section\">\
         <p>Cette réservation a été effectuée le {}.</p>\
         <p>Un de nos chauffeurs prendra contact avec le client pour confirmer les détails.</p>\
         </div>\
         <div class=\"footer\">\
         <p>Cet email a été envoyé automatiquement. Merci de ne pas y répondre.</p>\
         </div>\
         </div></div></body></html>",
        Utc::now().format("%d/%m/%Y à %H:%M")
    ));

    body
}

pub fn subject(booking: &BookingRequest) -> String {
    format!(
        "Nouvelle réservation - {} {}",
        text(&booking.first_name),
        text(&booking.last_name)
    )
}

fn text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("Non spécifié")
}

fn trip_type_text(trip_type: TripType) -> &'static str {
    match trip_type {
        TripType::RoundTrip => "Aller-retour",
        TripType::Outbound => "Aller simple",
        TripType::Inbound => "Retour simple",
    }
}
