//! Canned responses keyed by topic tag
//!
//! Every tag listed in an entry's `options` must either name another entry in
//! this table or be one of the contact routes, which open the contact form
//! instead of replying with catalog text.

use serde::Serialize;

/// Tag of the entry sent on first contact
pub const WELCOME_TAG: &str = "welcome";

/// Static catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub tag: &'static str,
    pub message: &'static str,
    pub options: &'static [&'static str],
    pub action: Option<ReplyAction>,
}

impl Entry {
    const fn new(
        tag: &'static str,
        message: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self {
            tag,
            message,
            options,
            action: None,
        }
    }

    const fn collecting_contact(self) -> Self {
        Self {
            action: Some(ReplyAction::CollectContact),
            ..self
        }
    }
}

/// Directive for the chat widget attached to a reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyAction {
    /// Open the contact form
    CollectContact,
}

/// Reply as sent to the widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseEntry {
    #[serde(skip)]
    pub topic: String,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<ReplyAction>,
}

impl From<&Entry> for ResponseEntry {
    fn from(entry: &Entry) -> Self {
        Self {
            topic: entry.tag.to_string(),
            message: entry.message.to_string(),
            options: entry.options.iter().map(|tag| (*tag).to_string()).collect(),
            action: entry.action,
        }
    }
}

/// Look up a catalog entry by tag
pub fn lookup(tag: &str) -> Option<&'static Entry> {
    ENTRIES.iter().copied().find(|entry| entry.tag == tag)
}

#[allow(dead_code)] // API completeness
pub fn contains(tag: &str) -> bool {
    lookup(tag).is_some()
}

/// All catalog entries in declaration order
#[allow(dead_code)] // API completeness
pub fn entries() -> &'static [&'static Entry] {
    ENTRIES
}

/// Reply for a tag that routes to the contact form, if it is one
pub fn contact_route(tag: &str) -> Option<&'static Entry> {
    CONTACT_ROUTES
        .iter()
        .copied()
        .find(|entry| entry.tag == tag)
}

#[allow(dead_code)] // API completeness
pub fn is_contact_route(tag: &str) -> bool {
    contact_route(tag).is_some()
}

static ENTRIES: &[&Entry] = &[
    &WELCOME,
    &MISSIONARIO,
    &MANTENEDOR,
    &INFORMACOES,
    &CONTATO_HUMANO,
    &CADASTRO_MISSIONARIO,
    &APOIO_FINANCEIRO,
    &APOIO_SERVICOS,
    &INICIAR_CADASTRO,
    &DOCUMENTOS_NECESSARIOS,
    &TRANSPARENCIA,
    &COMUNIDADE,
    &COMO_FUNCIONA,
    &SEGURANCA,
    &INICIAR_APOIO,
    &COMO_SERVIR,
    &MENTORIA,
    &MODELO_DOCUMENTOS,
    &PARTICIPAR_COMUNIDADE,
    &CUIDADO_PASTORAL,
    &CADASTRAR_AGORA,
];

static CONTACT_ROUTES: &[&Entry] = &[&DEIXAR_CONTATO, &AGENDAR_CONVERSA];

const MAIN_MENU: &[&str] = &[
    "missionario",
    "mantenedor",
    "informacoes",
    "contato_humano",
];

// ============================================================================
// Entry Points
// ============================================================================

pub static WELCOME: Entry = Entry::new(
    WELCOME_TAG,
    "🌟 Paz do Senhor! Seja muito bem-vindo(a) à Manna Bridge! \n\nSou seu assistente virtual e estou aqui para te servir com muito amor e dedicação. Nossa missão é conectar corações generosos a missionários dedicados, sendo uma ponte de apoio, transparência e comunidade para que a obra do Reino prospere.\n\n\"E o meu Deus, segundo as suas riquezas, suprirá todas as vossas necessidades em glória, por Cristo Jesus.\" - Filipenses 4:19\n\n✨ Como posso te ajudar hoje?",
    &["missionario", "mantenedor", "informacoes"],
);

pub static MISSIONARIO: Entry = Entry::new(
    "missionario",
    "🙏 Que bênção saber que você é um(a) missionário(a)! \n\n\"Assim como me enviaste ao mundo, também eu os enviei ao mundo.\" - João 17:18\n\nSabemos dos desafios que vocês enfrentam e estamos aqui para apoiá-lo(a) de forma integral, como o Corpo de Cristo deve fazer:\n\n💰 **Apoio Financeiro**: Conectamos você a mantenedores comprometidos com sua visão\n❤️ **Cuidado Emocional**: Rede de apoio pastoral e acompanhamento espiritual\n🤝 **Comunidade**: Conexão com outros missionários e mentores experientes\n📊 **Transparência**: Prestação de contas clara que honra a Deus e os doadores\n\n**Como começar sua jornada conosco:**\n1. Cadastre-se em nossa plataforma com oração\n2. Complete seu perfil missionário com transparência\n3. Compartilhe sua visão e chamado divino\n4. Conecte-se com mantenedores que Deus preparou\n\nEm que área posso te orientar primeiro?",
    &[
        "cadastro_missionario",
        "apoio_financeiro",
        "comunidade",
        "contato_humano",
    ],
);

pub static MANTENEDOR: Entry = Entry::new(
    "mantenedor",
    "💝 Que coração generoso! É maravilhoso saber que você deseja apoiar a obra missionária!\n\n\"Cada um contribua segundo propôs no seu coração; não com tristeza, ou por necessidade; porque Deus ama ao que dá com alegria.\" - 2 Coríntios 9:7\n\nComo mantenedor na Manna Bridge, você se torna parte essencial da Grande Comissão:\n\n🎯 **Apoio Direcionado**: Escolha missionários que Deus colocar em seu coração\n💰 **Contribuição Financeira**: Apoio mensal ou pontual com transparência cristã\n🙏 **Apoio Espiritual**: Seja um intercessor e encorajador constante\n❤️ **Acompanhamento**: Receba relatórios que mostram o fruto de sua generosidade\n📱 **Transparência Total**: Veja como Deus multiplica sua semente\n\n**Formas de participar da obra:**\n• Apoio financeiro mensal (como Paulo recebia)\n• Contribuições pontuais para projetos específicos\n• Apoio em serviços (mentoria, capacitação, oração)\n• Encorajamento espiritual e comunhão\n\nQual forma de apoio Deus está colocando em seu coração?",
    &[
        "apoio_financeiro",
        "apoio_servicos",
        "transparencia",
        "contato_humano",
    ],
);

pub static INFORMACOES: Entry = Entry::new(
    "informacoes",
    "🌍 A Manna Bridge nasceu de um coração que vê a necessidade real dos missionários!\n\n\"Ide, portanto, fazei discípulos de todas as nações...\" - Mateus 28:19\n\n**O Problema que Resolvemos:**\nMuitos missionários retornam antes do tempo por falta de:\n• Apoio financeiro consistente\n• Cuidado emocional e espiritual\n• Transparência na prestação de contas\n• Comunidade de apoio\n\n**Nossa Solução Cristã:**\n✅ Plataforma segura e transparente\n✅ Conexão direta entre mantenedores e missionários\n✅ Acompanhamento integral e cuidado pastoral\n✅ Prestação de contas clara e regular\n✅ Comunidade de apoio mútuo\n\n**Nosso Impacto no Reino:**\n• Missionários permanecem mais tempo no campo\n• Mantenedores veem o fruto de sua generosidade\n• Transparência gera confiança e mais apoio\n• Comunidade fortalece a todos\n\nQuer saber mais sobre algum aspecto específico?",
    &[
        "como_funciona",
        "transparencia",
        "seguranca",
        "contato_humano",
    ],
);

pub static CONTATO_HUMANO: Entry = Entry::new(
    "contato_humano",
    "👥 **Vamos Conversar Pessoalmente!**\n\n\"Melhor é serem dois do que um... se um cair, o outro levanta o seu companheiro.\" - Eclesiastes 4:9-10\n\nAlgumas conversas são melhores quando temos um toque humano! Nossa equipe está pronta para te atender com todo carinho cristão e atenção pastoral que você merece.\n\n**Nossa Equipe Inclui:**\n🎯 Especialistas em missões com experiência de campo\n💰 Consultores financeiros cristãos\n🙏 Cuidadores pastorais e intercessores\n💻 Suporte técnico dedicado\n📞 Atendimento humanizado\n\n**Formas de Contato:**\n📧 Email: contato@mannabridge.com\n📱 WhatsApp: (11) 99999-9999\n📞 Telefone: (11) 3333-4444\n🕐 Horário: Segunda a Sexta, 9h às 18h\n\n💝 **Estamos ansiosos para conhecer você e fazer parte da sua história no Reino!**",
    &["deixar_contato", "agendar_conversa"],
);

// ============================================================================
// Follow-up Topics
// ============================================================================

pub static CADASTRO_MISSIONARIO: Entry = Entry::new(
    "cadastro_missionario",
    "📝 **Processo de Cadastro para Missionários:**\n\n**Passo 1:** Preencha o formulário inicial\n• Dados pessoais e contato\n• Informações sobre sua missão\n• Campo de atuação e localização\n\n**Passo 2:** Documentação\n• Carta de recomendação da igreja/organização\n• Plano missionário detalhado\n• Orçamento e necessidades financeiras\n\n**Passo 3:** Verificação\n• Nossa equipe analisa sua documentação\n• Entrevista online (se necessário)\n• Aprovação e ativação do perfil\n\n**Passo 4:** Conexão\n• Seu perfil fica visível para mantenedores\n• Começam as conexões e apoios\n• Acompanhamento contínuo\n\n🚀 **Pronto para começar?** Posso te conectar com nossa equipe para iniciar seu cadastro!",
    &[
        "iniciar_cadastro",
        "documentos_necessarios",
        "contato_humano",
    ],
);

pub static APOIO_FINANCEIRO: Entry = Entry::new(
    "apoio_financeiro",
    "💰 **Como Funciona o Apoio Financeiro:**\n\n**Para Missionários:**\n• Receba apoio mensal regular\n• Contribuições pontuais para projetos específicos\n• Transparência total no uso dos recursos\n• Relatórios mensais automáticos\n\n**Para Mantenedores:**\n• Escolha o valor e frequência\n• Acompanhe o uso de cada real\n• Receba relatórios detalhados\n• Comunicação direta com o missionário\n\n**Segurança e Transparência:**\n✅ Plataforma segura com criptografia\n✅ Prestação de contas obrigatória\n✅ Auditoria regular dos recursos\n✅ Relatórios financeiros mensais\n\n**Taxas:**\n• Taxa mínima apenas para manutenção da plataforma\n• 95% dos recursos vão direto para a missão\n• Total transparência nas taxas\n\nQuer saber mais sobre segurança ou começar a apoiar?",
    &[
        "seguranca",
        "iniciar_apoio",
        "transparencia",
        "contato_humano",
    ],
);

pub static APOIO_SERVICOS: Entry = Entry::new(
    "apoio_servicos",
    "🛠️ **Apoio em Serviços - Seus Talentos para o Reino:**\n\n\"Cada um administre aos outros o dom como o recebeu, como bons despenseiros da multiforme graça de Deus.\" - 1 Pedro 4:10\n\n**Como Você Pode Servir:**\n\n🎓 **Mentoria e Capacitação:**\n• Treinamento em áreas específicas\n• Desenvolvimento de liderança\n• Capacitação técnica e ministerial\n\n💼 **Consultoria Profissional:**\n• Gestão financeira\n• Marketing e comunicação\n• Tecnologia e sistemas\n• Estratégia missionária\n\n🙏 **Apoio Espiritual:**\n• Intercessão regular\n• Aconselhamento pastoral\n• Discipulado à distância\n• Encorajamento constante\n\n📚 **Recursos e Materiais:**\n• Livros e materiais didáticos\n• Equipamentos necessários\n• Recursos digitais\n• Ferramentas ministeriais\n\n💝 **Seu talento pode transformar uma missão!**",
    &["como_servir", "mentoria", "contato_humano"],
);

pub static INICIAR_CADASTRO: Entry = Entry::new(
    "iniciar_cadastro",
    "🚀 **Vamos Começar Sua Jornada Missionária!**\n\n\"E disse-lhes: Ide por todo o mundo, pregai o evangelho a toda criatura.\" - Marcos 16:15\n\n**Próximos Passos:**\n\n1️⃣ **Acesse nosso portal:** www.mannabridge.com/cadastro\n2️⃣ **Prepare os documentos** necessários\n3️⃣ **Ore pela orientação** divina durante o processo\n4️⃣ **Nossa equipe entrará em contato** em até 48h\n\n**O que você precisa ter em mãos:**\n✅ Documento de identidade\n✅ Carta de recomendação pastoral\n✅ Plano missionário detalhado\n✅ Orçamento estimado\n✅ Comprovante de chamado/vocação\n\n**Tempo de Processo:**\n• Análise inicial: 3-5 dias úteis\n• Entrevista online: agendada conforme disponibilidade\n• Aprovação final: até 7 dias úteis\n\n🎯 **Quer que eu agende uma conversa com nossa equipe para te orientar pessoalmente?**",
    &[
        "agendar_conversa",
        "documentos_necessarios",
        "contato_humano",
    ],
);

pub static DOCUMENTOS_NECESSARIOS: Entry = Entry::new(
    "documentos_necessarios",
    "📋 **Documentos Necessários para Cadastro:**\n\n\"Tudo, porém, seja feito com decência e ordem.\" - 1 Coríntios 14:40\n\n**Documentos Obrigatórios:**\n\n📄 **Pessoais:**\n• RG ou CNH (frente e verso)\n• CPF\n• Comprovante de residência\n• Foto 3x4 recente\n\n⛪ **Eclesiásticos:**\n• Carta de recomendação pastoral (modelo disponível)\n• Declaração de membresia da igreja\n• Carta de apoio da organização missionária (se aplicável)\n\n📋 **Missionários:**\n• Plano missionário detalhado (visão, estratégia, metas)\n• Orçamento mensal estimado\n• Cronograma de atividades\n• Relatório de preparação missionária\n\n💰 **Financeiros:**\n• Dados bancários para recebimento\n• Declaração de imposto de renda (se aplicável)\n• Comprovantes de outras fontes de renda\n\n📧 **Envio:** Todos os documentos podem ser enviados digitalmente através da plataforma!",
    &["modelo_documentos", "iniciar_cadastro", "contato_humano"],
);

pub static TRANSPARENCIA: Entry = Entry::new(
    "transparencia",
    "📊 **Transparência é Nosso Compromisso:**\n\n**Para Missionários:**\n• Relatórios mensais obrigatórios\n• Fotos e vídeos das atividades\n• Prestação de contas financeira detalhada\n• Metas e resultados alcançados\n\n**Para Mantenedores:**\n• Dashboard com todas as informações\n• Relatórios em tempo real\n• Comunicação direta com missionários\n• Histórico completo de contribuições\n\n**Nossos Controles:**\n✅ Verificação de identidade rigorosa\n✅ Validação de documentos\n✅ Acompanhamento pastoral\n✅ Auditoria regular\n✅ Sistema de avaliação mútua\n\n**Tecnologia Segura:**\n• Criptografia de ponta a ponta\n• Servidores seguros\n• Backup automático\n• Conformidade com LGPD\n\n💡 **Resultado:** Confiança mútua e impacto real no Reino!",
    &["seguranca", "como_funciona", "contato_humano"],
);

pub static COMUNIDADE: Entry = Entry::new(
    "comunidade",
    "🤝 **Comunidade Manna Bridge - Juntos Somos Mais Fortes!**\n\n**Para Missionários:**\n• Grupos de apoio por região/área\n• Mentoria com missionários experientes\n• Encontros virtuais regulares\n• Compartilhamento de experiências\n• Oração mútua e encorajamento\n\n**Para Mantenedores:**\n• Comunidade de doadores engajados\n• Encontros para conhecer missionários\n• Grupos de oração específicos\n• Compartilhamento de testemunhos\n• Eventos de capacitação\n\n**Atividades da Comunidade:**\n📅 Encontros mensais online\n🙏 Correntes de oração\n📚 Capacitações e workshops\n🎉 Celebração de conquistas\n💬 Grupos de WhatsApp por interesse\n\n**Cuidado Pastoral:**\n• Acompanhamento emocional\n• Aconselhamento quando necessário\n• Suporte em crises\n• Celebração de vitórias\n\n❤️ **Ninguém caminha sozinho na Manna Bridge!**",
    &[
        "participar_comunidade",
        "cuidado_pastoral",
        "contato_humano",
    ],
);

pub static COMO_FUNCIONA: Entry = Entry::new(
    "como_funciona",
    "⚙️ **Como a Manna Bridge Funciona:**\n\n**1. Cadastro e Verificação**\n• Missionários e mantenedores se cadastram\n• Verificação rigorosa de identidade\n• Aprovação da equipe Manna Bridge\n\n**2. Perfis e Conexão**\n• Missionários criam perfis detalhados\n• Mantenedores exploram e escolhem\n• Sistema de match baseado em afinidade\n\n**3. Apoio e Acompanhamento**\n• Contribuições seguras pela plataforma\n• Relatórios automáticos mensais\n• Comunicação direta facilitada\n\n**4. Transparência Total**\n• Dashboard com todas as informações\n• Prestação de contas obrigatória\n• Auditoria regular dos processos\n\n**5. Comunidade e Cuidado**\n• Grupos de apoio e oração\n• Mentoria e acompanhamento\n• Eventos e capacitações\n\n🎯 **Resultado:** Missionários bem cuidados, mantenedores confiantes, Reino avançando!",
    &[
        "cadastrar_agora",
        "transparencia",
        "seguranca",
        "contato_humano",
    ],
);

pub static SEGURANCA: Entry = Entry::new(
    "seguranca",
    "🔒 **Segurança é Nossa Prioridade:**\n\n**Segurança Técnica:**\n• Criptografia SSL de 256 bits\n• Servidores em nuvem segura\n• Backup automático diário\n• Conformidade com LGPD\n• Monitoramento 24/7\n\n**Segurança Financeira:**\n• Gateway de pagamento certificado\n• Contas segregadas para cada missionário\n• Auditoria financeira regular\n• Seguro contra fraudes\n• Rastreabilidade total\n\n**Segurança de Dados:**\n• Verificação de identidade rigorosa\n• Validação de documentos\n• Checagem de referências\n• Histórico de atividades\n• Sistema de denúncias\n\n**Proteção Legal:**\n• Termos de uso claros\n• Contratos de transparência\n• Assessoria jurídica especializada\n• Conformidade regulatória\n\n✅ **Sua confiança e segurança são sagradas para nós!**",
    &["como_funciona", "transparencia", "contato_humano"],
);

// ============================================================================
// Next Steps
// ============================================================================

pub static INICIAR_APOIO: Entry = Entry::new(
    "iniciar_apoio",
    "💝 **Vamos Começar Seu Apoio!**\n\n\"Dai, e ser-vos-á dado; boa medida, recalcada, sacudida e transbordando.\" - Lucas 6:38\n\n**Próximos Passos:**\n1️⃣ Conheça os missionários cadastrados na plataforma\n2️⃣ Escolha quem Deus colocar em seu coração\n3️⃣ Defina o valor e a frequência do seu apoio\n4️⃣ Acompanhe os relatórios mensais da missão\n\nNossa equipe de relacionamento com mantenedores pode te acompanhar em cada passo. Quer deixar seu contato ou agendar uma conversa?",
    &["deixar_contato", "agendar_conversa", "transparencia"],
);

pub static COMO_SERVIR: Entry = Entry::new(
    "como_servir",
    "🙌 **Como Você Pode Servir:**\n\n\"Servi uns aos outros, cada um conforme o dom que recebeu.\" - 1 Pedro 4:10\n\n**Caminhos para servir:**\n• Conte-nos seus dons e sua área profissional\n• Nossa equipe identifica missionários com essa necessidade\n• Combinamos juntos a forma e a frequência do serviço\n• Você acompanha o fruto do seu serviço no campo\n\nDeixe seu contato e vamos descobrir juntos onde seu talento pode abençoar!",
    &["mentoria", "deixar_contato", "contato_humano"],
);

pub static MENTORIA: Entry = Entry::new(
    "mentoria",
    "🎓 **Mentoria Missionária:**\n\n\"E o que de mim ouviste... confia-o a homens fiéis, que sejam idôneos para também ensinarem os outros.\" - 2 Timóteo 2:2\n\n**Como funciona:**\n• Encontros online mensais com um missionário\n• Acompanhamento em liderança, gestão ou área técnica\n• Troca de experiências e oração mútua\n\nQuer agendar uma conversa para entender como ser ou ter um mentor?",
    &["como_servir", "agendar_conversa", "contato_humano"],
);

pub static MODELO_DOCUMENTOS: Entry = Entry::new(
    "modelo_documentos",
    "📎 **Modelos de Documentos:**\n\nDisponibilizamos modelos para facilitar seu cadastro:\n• Carta de recomendação pastoral\n• Plano missionário (visão, estratégia, metas)\n• Orçamento mensal estimado\n\nDeixe seu contato e nossa equipe envia os modelos para o seu email!",
    &[
        "documentos_necessarios",
        "deixar_contato",
        "contato_humano",
    ],
);

pub static PARTICIPAR_COMUNIDADE: Entry = Entry::new(
    "participar_comunidade",
    "🤝 **Participe da Nossa Comunidade!**\n\n\"E perseveravam na doutrina dos apóstolos, e na comunhão, e no partir do pão, e nas orações.\" - Atos 2:42\n\n**Como entrar:**\n• Deixe seu contato para receber o convite\n• Escolha os grupos por região ou interesse\n• Participe dos encontros mensais online\n\nSerá uma alegria caminhar junto com você!",
    &["cuidado_pastoral", "deixar_contato", "contato_humano"],
);

pub static CUIDADO_PASTORAL: Entry = Entry::new(
    "cuidado_pastoral",
    "❤️ **Cuidado Pastoral:**\n\n\"Vinde a mim, todos os que estais cansados e oprimidos, e eu vos aliviarei.\" - Mateus 11:28\n\nNossa rede de cuidadores pastorais oferece:\n• Acompanhamento emocional e espiritual\n• Aconselhamento em momentos de crise\n• Intercessão constante pela sua família e ministério\n\nSe você precisa conversar com alguém agora, podemos agendar um horário.",
    &[
        "participar_comunidade",
        "agendar_conversa",
        "contato_humano",
    ],
);

pub static CADASTRAR_AGORA: Entry = Entry::new(
    "cadastrar_agora",
    "✍️ **Cadastre-se Agora!**\n\nEscolha o seu caminho:\n• **Missionário(a):** inicie seu cadastro e prepare seus documentos\n• **Mantenedor:** comece a apoiar um missionário ainda hoje\n\nPor onde você gostaria de começar?",
    &["iniciar_cadastro", "iniciar_apoio", "contato_humano"],
);

// ============================================================================
// Contact Routes
// ============================================================================

pub static DEIXAR_CONTATO: Entry = Entry::new(
    "deixar_contato",
    "📧 Que alegria! Deixe seu nome, email e uma mensagem contando como podemos te servir, e nossa equipe entrará em contato em até 24 horas.",
    &[],
)
.collecting_contact();

pub static AGENDAR_CONVERSA: Entry = Entry::new(
    "agendar_conversa",
    "📅 Vamos agendar uma conversa! Deixe seu nome, email e o melhor dia e horário para você, e nossa equipe confirmará o agendamento.",
    &[],
)
.collecting_contact();

// ============================================================================
// Replies Outside the Catalog
// ============================================================================

pub static GREETING: Entry = Entry::new(
    "saudacao",
    "🌟 Paz do Senhor! Que alegria ter você aqui! \n\n\"A paz vos deixo, a minha paz vos dou; não vo-la dou como o mundo a dá.\" - João 14:27\n\nEstou aqui para te ajudar com muito carinho. Como posso te servir hoje?",
    MAIN_MENU,
);

pub static THANKS: Entry = Entry::new(
    "agradecimento",
    "🙏 De nada! É uma alegria poder te ajudar! \n\n\"Em tudo dai graças, porque esta é a vontade de Deus em Cristo Jesus para convosco.\" - 1 Tessalonicenses 5:18\n\nHá mais alguma forma de te servir hoje?",
    MAIN_MENU,
);

pub static FALLBACK: Entry = Entry::new(
    "padrao",
    "😊 Obrigado por sua mensagem! Estou aqui para te ajudar da melhor forma possível.\n\n\"Levai as cargas uns dos outros, e assim cumprireis a lei de Cristo.\" - Gálatas 6:2\n\nPara que eu possa te orientar melhor, me conte: você é um(a) **missionário(a)** buscando apoio, um **mantenedor** querendo contribuir, ou gostaria de **conhecer mais** sobre nossa plataforma?\n\n✨ Estou aqui para te guiar com todo carinho cristão!",
    MAIN_MENU,
);
