//! Display labels for quick-reply tags

/// (tag, label) pairs in menu order
static LABELS: &[(&str, &str)] = &[
    ("missionario", "Sou missionário"),
    ("mantenedor", "Quero apoiar"),
    ("informacoes", "Mais informações"),
    ("cadastro_missionario", "Como me cadastrar?"),
    ("apoio_financeiro", "Apoio financeiro"),
    ("apoio_servicos", "Apoio em serviços"),
    ("comunidade", "Comunidade"),
    ("transparencia", "Transparência"),
    ("seguranca", "Segurança"),
    ("como_funciona", "Como funciona?"),
    ("iniciar_cadastro", "Iniciar cadastro"),
    ("documentos_necessarios", "Documentos necessários"),
    ("modelo_documentos", "Modelos de documentos"),
    ("iniciar_apoio", "Começar a apoiar"),
    ("como_servir", "Como posso servir?"),
    ("mentoria", "Mentoria"),
    ("participar_comunidade", "Participar da comunidade"),
    ("cuidado_pastoral", "Cuidado pastoral"),
    ("cadastrar_agora", "Cadastrar agora"),
    ("contato_humano", "Falar com uma pessoa"),
    ("deixar_contato", "Deixar meu contato"),
    ("agendar_conversa", "Agendar conversa"),
];

#[allow(dead_code)] // API completeness
pub fn label(tag: &str) -> Option<&'static str> {
    LABELS
        .iter()
        .find_map(|(known, label)| (*known == tag).then_some(*label))
}

pub fn labels() -> &'static [(&'static str, &'static str)] {
    LABELS
}
