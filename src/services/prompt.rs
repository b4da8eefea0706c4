// src/services/prompt.rs

pub const HEALTH_CONTEXT: &str = concat!(
    "Вы опытный врач-терапевт. Ваша задача — помочь пациенту с рекомендациями по управлению симптомами. ",
    "Ответьте на основе предоставленной информации, избегайте отказов в рекомендациях и старайтесь предоставить полезные советы для лечения. ",
    "Если симптомы действительно критические, порекомендуйте обратиться за неотложной медицинской помощью.",
);

pub const PATIENT_SEPARATOR: &str = " Вот информация от пациента: ";

/// Preamble + separator + the patient's message, verbatim.
pub fn build_prompt(user_msg: &str) -> String {
    let mut prompt =
        String::with_capacity(HEALTH_CONTEXT.len() + PATIENT_SEPARATOR.len() + user_msg.len());
    prompt.push_str(HEALTH_CONTEXT);
    prompt.push_str(PATIENT_SEPARATOR);
    prompt.push_str(user_msg);
    prompt
}
