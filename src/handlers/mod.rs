pub mod applications;
pub mod auth;
pub mod inquiries;
pub mod leaderboard;
pub mod merch;
pub mod messages;
pub mod performances;
pub mod seasons;
pub mod stages;
pub mod webhook;

use actix_web::web;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // ── Auth routes (protected by JWT via the AuthenticatedUser extractor) ──
    cfg.service(
        web::scope("/auth")
            .route("/me", web::get().to(auth::me))
            .route("/complete-profile", web::post().to(auth::complete_profile)),
    );

    // ── Season routes (reads public, writes admin-only) ──
    cfg.service(
        web::scope("/seasons")
            .route("", web::get().to(seasons::get_seasons))
            .route("", web::post().to(seasons::create_season))
            .route("/active", web::get().to(seasons::get_active_season))
            .route("/{id}", web::get().to(seasons::get_season))
            .route("/{id}", web::put().to(seasons::update_season))
            .route("/{id}/activate", web::post().to(seasons::activate_season))
            .route("/{id}/conclude", web::post().to(seasons::conclude_season))
            .route("/{id}/stages", web::get().to(stages::get_stages_by_season))
            .route("/{id}/applications", web::get().to(applications::get_by_season))
            .route("/{id}/leaderboard", web::get().to(leaderboard::get_leaderboard)),
    );

    // ── Stage routes (admin-only; sequencing rules enforced on writes) ──
    cfg.service(
        web::scope("/stages")
            .route("", web::post().to(stages::create_stage))
            .route("/{id}", web::get().to(stages::get_stage))
            .route("/{id}", web::put().to(stages::update_stage))
            .route("/{id}", web::delete().to(stages::delete_stage))
            .route("/{id}/status", web::put().to(stages::update_status))
            .route("/{id}/performances", web::get().to(performances::get_by_stage))
            .route("/{id}/performances", web::post().to(performances::record)),
    );

    // ── Application routes ──
    cfg.service(
        web::scope("/applications")
            .route("", web::post().to(applications::apply))
            .route("/mine", web::get().to(applications::get_mine))
            .route("/{id}/status", web::put().to(applications::update_status))
            .route("/{id}/elimination", web::put().to(applications::set_elimination)),
    );

    // ── Hall of Fame (public, precomputed champions) ──
    cfg.service(
        web::resource("/hall-of-fame").route(web::get().to(leaderboard::get_hall_of_fame)),
    );

    // ── Messaging (admin fan-out + user inbox) ──
    cfg.service(
        web::scope("/messages")
            .route("", web::get().to(messages::get_messages))
            .route("", web::post().to(messages::send_message)),
    );
    cfg.service(
        web::scope("/notifications")
            .route("", web::get().to(messages::get_notifications))
            .route("/{id}/read", web::put().to(messages::mark_read)),
    );

    // ── Merch catalogue (reads public, writes admin-only) ──
    cfg.service(
        web::scope("/merch")
            .route("", web::get().to(merch::get_items))
            .route("", web::post().to(merch::create_item))
            .route("/{id}", web::put().to(merch::update_item))
            .route("/{id}", web::delete().to(merch::delete_item)),
    );

    // ── Support inquiries (admin) + inbound email webhook ──
    cfg.service(
        web::scope("/inquiries")
            .route("", web::get().to(inquiries::get_inquiries))
            .route("/{id}/respond", web::post().to(inquiries::respond)),
    );
    cfg.service(
        web::resource("/webhooks/inbound-email")
            .route(web::post().to(webhook::inbound_email)),
    );
}
