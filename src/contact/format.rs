//! Email body construction for the two outbound messages.
//!
//! Both messages carry an HTML body styled after the site's palette plus a
//! plain-text alternative. User input is HTML-escaped before interpolation
//! into the HTML bodies; text bodies keep the raw values.

use chrono::{DateTime, Utc};

use crate::contact::form::ContactSubmission;
use crate::delivery::OutgoingEmail;

const SITE_URL: &str = "https://novaxis-pa.vercel.app/";
const CONFIRMATION_SUBJECT: &str = "Confirmación: Hemos recibido tu mensaje - Novaxis";

/// Confirmation summary truncates the message at this many characters.
const PREVIEW_CHARS: usize = 100;

/// Escape HTML-sensitive characters in user-provided text.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Truncated message summary for the confirmation email.
fn preview(message: &str) -> String {
    let mut out: String = message.chars().take(PREVIEW_CHARS).collect();
    if message.chars().count() > PREVIEW_CHARS {
        out.push_str("...");
    }
    out
}

/// Operator notification: the submission forwarded to the site's inbox,
/// with `reply_to` set so the operator can answer the submitter directly.
pub fn notification_email(
    from: &str,
    recipient: &str,
    submission: &ContactSubmission,
    now: DateTime<Utc>,
) -> OutgoingEmail {
    let date = now.format("%d/%m/%Y %H:%M UTC");

    let html = format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px; background-color: #f8f9fa;">
  <div style="background: linear-gradient(135deg, #4A90E2, #6BB6FF); padding: 30px; border-radius: 10px 10px 0 0; text-align: center;">
    <h1 style="color: white; margin: 0; font-size: 24px;">Nuevo Mensaje de Contacto</h1>
  </div>
  <div style="background: white; padding: 30px; border-radius: 0 0 10px 10px;">
    <div style="margin-bottom: 20px; padding: 15px; background-color: #E6F3FF; border-left: 4px solid #4A90E2; border-radius: 4px;">
      <p style="margin: 0; color: #333;"><strong>De:</strong> {name}</p>
      <p style="margin: 5px 0 0 0; color: #666;">{email}</p>
    </div>
    <h3 style="color: #4A90E2; margin: 0 0 10px 0; font-size: 18px;">Asunto:</h3>
    <p style="margin: 0 0 20px 0; color: #333; font-size: 16px; font-weight: 500;">{subject}</p>
    <h3 style="color: #4A90E2; margin: 0 0 10px 0; font-size: 18px;">Mensaje:</h3>
    <div style="background-color: #f8f9fa; padding: 20px; border-radius: 8px; border: 1px solid #e9ecef;">
      <p style="margin: 0; color: #333; line-height: 1.6; white-space: pre-wrap;">{message}</p>
    </div>
    <div style="margin-top: 30px; padding-top: 20px; border-top: 1px solid #e9ecef; text-align: center;">
      <p style="margin: 0; color: #666; font-size: 14px;">Enviado desde el formulario de contacto de <a href="{site}" style="color: #4A90E2; text-decoration: none; font-weight: 500;">Novaxis</a></p>
      <p style="margin: 10px 0 0 0; color: #999; font-size: 12px;">Fecha: {date}</p>
    </div>
  </div>
</div>"#,
        name = escape_html(&submission.name),
        email = escape_html(&submission.email),
        subject = escape_html(&submission.subject),
        message = escape_html(&submission.message),
        site = SITE_URL,
        date = date,
    );

    let text = format!(
        "Nuevo mensaje de contacto desde Novaxis.com\n\n\
         De: {} ({})\n\
         Asunto: {}\n\n\
         Mensaje:\n{}\n\n\
         Enviado el: {}",
        submission.name, submission.email, submission.subject, submission.message, date,
    );

    OutgoingEmail {
        from: from.to_string(),
        to: recipient.to_string(),
        reply_to: Some(submission.email.clone()),
        subject: format!("Contacto Novaxis: {}", submission.subject),
        html,
        text,
    }
}

/// Submitter confirmation: the best-effort thank-you with a summary of what
/// was received.
pub fn confirmation_email(from: &str, submission: &ContactSubmission) -> OutgoingEmail {
    let html = format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px; background-color: #f8f9fa;">
  <div style="background: linear-gradient(135deg, #4A90E2, #6BB6FF); padding: 30px; border-radius: 10px 10px 0 0; text-align: center;">
    <h1 style="color: white; margin: 0; font-size: 24px;">¡Gracias por contactarnos!</h1>
  </div>
  <div style="background: white; padding: 30px; border-radius: 0 0 10px 10px;">
    <p style="margin: 0 0 20px 0; color: #333; font-size: 16px;">Hola <strong>{name}</strong>,</p>
    <p style="margin: 0 0 20px 0; color: #333; line-height: 1.6;">Hemos recibido tu mensaje y queremos agradecerte por contactar con Novaxis. Nuestro equipo revisará tu consulta y te responderemos en un plazo máximo de 24 horas.</p>
    <div style="background-color: #E6F3FF; padding: 20px; border-radius: 8px; margin: 20px 0; border-left: 4px solid #4A90E2;">
      <p style="margin: 0 0 10px 0; color: #333; font-weight: 500;">Resumen de tu mensaje:</p>
      <p style="margin: 0 0 5px 0; color: #666;"><strong>Asunto:</strong> {subject}</p>
      <p style="margin: 0; color: #666;"><strong>Mensaje:</strong> {preview}</p>
    </div>
    <p style="margin: 20px 0; color: #333; line-height: 1.6;">Mientras tanto, te invitamos a explorar nuestros servicios y proyectos en nuestro <a href="{site}" style="color: #4A90E2; text-decoration: none;">sitio web</a>.</p>
    <div style="margin-top: 30px; padding-top: 20px; border-top: 1px solid #e9ecef;">
      <p style="margin: 0 0 10px 0; color: #333; font-weight: 500;">Información de contacto:</p>
      <p style="margin: 0 0 5px 0; color: #666;">📧 meisy.rangel@utp.ac.pa</p>
      <p style="margin: 0 0 5px 0; color: #666;">📞 +507 6960-4824</p>
      <p style="margin: 0; color: #666;">📍 La Chorrera, Panamá</p>
    </div>
    <div style="margin-top: 30px; text-align: center;">
      <p style="margin: 0; color: #999; font-size: 14px;">Este es un email automático, por favor no respondas a este mensaje.</p>
      <p style="margin: 10px 0 0 0; color: #4A90E2; font-size: 14px; font-weight: 500;">Equipo Novaxis</p>
    </div>
  </div>
</div>"#,
        name = escape_html(&submission.name),
        subject = escape_html(&submission.subject),
        preview = escape_html(&preview(&submission.message)),
        site = SITE_URL,
    );

    let text = format!(
        "¡Gracias por contactarnos!\n\n\
         Hola {},\n\n\
         Hemos recibido tu mensaje y te responderemos en un plazo máximo de 24 horas.\n\n\
         Resumen de tu mensaje:\n\
         Asunto: {}\n\
         Mensaje: {}\n\n\
         Información de contacto:\n\
         Email: meisy.rangel@utp.ac.pa\n\
         Teléfono: +507 6960-4824\n\
         Ubicación: La Chorrera, Panamá\n\n\
         Equipo Novaxis",
        submission.name, submission.subject, submission.message,
    );

    OutgoingEmail {
        from: from.to_string(),
        to: submission.email.clone(),
        reply_to: None,
        subject: CONFIRMATION_SUBJECT.to_string(),
        html,
        text,
    }
}

// ── Tests ───────────────────────────────────────────────────────────
