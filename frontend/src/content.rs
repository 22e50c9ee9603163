//! Fixed article content: table of contents, videos, card lists and the
//! JSON-LD document published for indexers.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

pub const AUTHOR_NAME: &str = "Zander Aguiar";
pub const AUTHOR_TITLE: &str = "Psicólogo e Conselheiro em Dependência Química";
pub const ARTICLE_TITLE: &str = "Entendendo a Adicção: Uma Doença Crônica e Multifacetada";
pub const ARTICLE_DESCRIPTION: &str =
    "Guia completo sobre adicção como doença cerebral, com base em neurociência e evidências científicas";
pub const READING_TIME: &str = "Leitura: 15 minutos";

pub const YOUTUBE_CHANNEL: &str = "https://www.youtube.com/@zanderconselheiro";
pub const INSTAGRAM_PROFILE: &str = "https://www.instagram.com/zanderconselheiro/";
pub const FACEBOOK_PROFILE: &str = "https://www.facebook.com/profile.php?id=100049409713481";
pub const LEARN_MORE_VIDEO: &str = "https://youtu.be/OKQ6WCCjFqU";

pub fn published_on() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 10).unwrap_or_default()
}

const MONTHS_PT: [&str; 12] = [
    "janeiro", "fevereiro", "março", "abril", "maio", "junho",
    "julho", "agosto", "setembro", "outubro", "novembro", "dezembro",
];

/// "10 de janeiro de 2025"
pub fn long_date_pt(date: NaiveDate) -> String {
    format!("{} de {} de {}", date.day(), MONTHS_PT[date.month0() as usize], date.year())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TocEntry {
    pub id: &'static str,
    pub label: &'static str,
}

pub const INITIAL_SECTION: &str = "inicio";

pub const TABLE_OF_CONTENTS: [TocEntry; 11] = [
    TocEntry { id: "inicio", label: "Início" },
    TocEntry { id: "pilares", label: "Os Três Pilares" },
    TocEntry { id: "quatro-pilares", label: "Os Quatro Pilares" },
    TocEntry { id: "neurociencia", label: "Neurociência" },
    TocEntry { id: "uso-vs-doenca", label: "Uso vs Doença" },
    TocEntry { id: "fatores-risco", label: "Fatores de Risco" },
    TocEntry { id: "impacto", label: "Impacto Multidimensional" },
    TocEntry { id: "recuperacao", label: "Caminhos para Recuperação" },
    TocEntry { id: "videos", label: "Vídeos" },
    TocEntry { id: "recursos", label: "Recursos e Ajuda" },
    TocEntry { id: "autor", label: "Sobre o Autor" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VideoCategory {
    Concepts,
    Recovery,
    Prevention,
}

impl VideoCategory {
    pub const ALL: [VideoCategory; 3] = [VideoCategory::Concepts, VideoCategory::Recovery, VideoCategory::Prevention];

    pub fn label(self) -> &'static str {
        match self {
            VideoCategory::Concepts => "Conceitos",
            VideoCategory::Recovery => "Recuperação",
            VideoCategory::Prevention => "Prevenção",
        }
    }
}

/// Chip selection in the video gallery. `None` shows every video.
pub type VideoFilter = Option<VideoCategory>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Video {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
    pub category: VideoCategory,
}

pub const VIDEOS: [Video; 3] = [
    Video {
        id: "5P34Ve2sp3s",
        title: "Entendendo a Adicção como Doença Cerebral",
        description: "Neste vídeo, exploramos os fundamentos científicos da adicção e como ela afeta o cérebro humano.",
        duration: "12:34",
        category: VideoCategory::Concepts,
    },
    Video {
        id: "lQI0lsiqcZQ",
        title: "Caminhos para a Recuperação da Adicção",
        description: "Conheça as estratégias e caminhos eficazes para a recuperação da adicção, incluindo tratamentos baseados em evidências e suporte profissional.",
        duration: "15:47",
        category: VideoCategory::Recovery,
    },
    Video {
        id: "QpZ5NESDJco",
        title: "Fatores de Risco da Adicção",
        description: "Descubra os principais fatores genéticos, ambientais e psicológicos que aumentam a vulnerabilidade à adicção e como identificá-los precocemente.",
        duration: "14:12",
        category: VideoCategory::Prevention,
    },
];

pub fn videos_matching(filter: VideoFilter) -> Vec<&'static Video> {
    VIDEOS
        .iter()
        .filter(|video| filter.map_or(true, |category| video.category == category))
        .collect()
}

/// Title/description pair used by every card list on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub icon: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

pub const CHARACTERISTICS: [&str; 5] = [
    "Alterações neurobiológicas documentadas",
    "Padrão crônico e recorrente",
    "Impacto em múltiplas áreas da vida",
    "Necessidade de tratamento especializado",
    "Potencial de recuperação com suporte adequado",
];

pub const THREE_PILLARS: [Card; 3] = [
    Card {
        icon: "🧠",
        title: "Obsessão",
        text: "A mente fica constantemente preocupada com a substância ou comportamento. Pensamentos intrusivos e recorrentes dominam o dia a dia, interferindo na capacidade de concentração em outras atividades essenciais.",
    },
    Card {
        icon: "⚡",
        title: "Compulsão",
        text: "Uma força irresistível que impulsiona o comportamento aditivo, mesmo diante de consequências negativas evidentes. Não se trata de escolha consciente, mas de um impulso neurobiológico.",
    },
    Card {
        icon: "🔄",
        title: "Egocentrismo",
        text: "O foco excessivo em si mesmo e nas próprias necessidades imediatas, com dificuldade crescente de considerar o impacto das ações sobre outros. É uma consequência neurológica da doença.",
    },
];

pub const FOUR_PILLARS: [Card; 4] = [
    Card {
        icon: "",
        title: "Compulsão",
        text: "Impulso irresistível de buscar e consumir a substância, independente das consequências negativas conhecidas. O sistema de recompensa cerebral fica sequestrado.",
    },
    Card {
        icon: "",
        title: "Perda de Controle",
        text: "Incapacidade de regular ou limitar o uso uma vez iniciado. A pessoa não consegue parar quando planeja, consumindo quantidades maiores ou por períodos mais longos.",
    },
    Card {
        icon: "",
        title: "Tolerância",
        text: "Necessidade crescente de quantidades maiores para obter o mesmo efeito. O cérebro se adapta à presença da substância, exigindo doses progressivamente mais altas.",
    },
    Card {
        icon: "",
        title: "Abstinência",
        text: "Sintomas físicos e psicológicos desconfortáveis quando o uso é reduzido ou interrompido. Pode incluir ansiedade, tremores, sudorese, insônia e outros sinais de desconforto.",
    },
];

pub const RECREATIONAL_USE: [&str; 5] = [
    "Controle sobre frequência e quantidade",
    "Ausência de consequências negativas significativas",
    "Capacidade de parar quando desejado",
    "Funcionamento normal em todas as áreas da vida",
    "Uso ocasional sem preocupação constante",
];

pub const DISEASE_SIGNS: [&str; 5] = [
    "Perda progressiva de controle",
    "Consequências negativas graves e crescentes",
    "Incapacidade de parar apesar do desejo",
    "Deterioração em múltiplas áreas da vida",
    "Obsessão e preocupação constante",
];

pub const RISK_FACTORS: [Card; 5] = [
    Card {
        icon: "🧬",
        title: "Genética",
        text: "50-60% do risco é hereditário. Histórico familiar de adicção aumenta significativamente a probabilidade.",
    },
    Card {
        icon: "📅",
        title: "Idade de Início",
        text: "Uso precoce durante a adolescência, quando o cérebro ainda está em desenvolvimento, aumenta drasticamente o risco.",
    },
    Card {
        icon: "💔",
        title: "Trauma",
        text: "Experiências traumáticas, especialmente na infância, criam vulnerabilidade neurobiológica para dependências.",
    },
    Card {
        icon: "🧠",
        title: "Saúde Mental",
        text: "Transtornos como depressão, ansiedade e TEPT frequentemente coexistem com adicção.",
    },
    Card {
        icon: "👥",
        title: "Ambiente Social",
        text: "Pressão de pares, acesso fácil a substâncias e normalização do uso aumentam o risco.",
    },
];

pub const IMPACTS: [Card; 3] = [
    Card {
        icon: "",
        title: "Impacto Familiar",
        text: "Relacionamentos sofrem com confiança quebrada, comunicação deteriorada e padrões de codependência. Filhos de pais com adicção enfrentam riscos aumentados de problemas emocionais e comportamentais.",
    },
    Card {
        icon: "",
        title: "Consequências Profissionais",
        text: "Absenteísmo, baixa produtividade, acidentes de trabalho e perda de emprego são comuns. A instabilidade financeira resultante agrava ainda mais o ciclo da doença.",
    },
    Card {
        icon: "",
        title: "Saúde Física",
        text: "Doenças hepáticas, cardiovasculares, infecções, desnutrição e complicações médicas diversas. O uso de substâncias compromete o sistema imunológico e acelera o envelhecimento.",
    },
];

pub const RECOVERY_STEPS: [Card; 4] = [
    Card {
        icon: "",
        title: "Reconhecimento",
        text: "Aceitar que existe um problema e que ajuda é necessária. Este primeiro passo, embora difícil, é fundamental.",
    },
    Card {
        icon: "",
        title: "Buscar Apoio",
        text: "Procurar profissionais especializados, grupos de apoio e construir uma rede de suporte sólida e confiável.",
    },
    Card {
        icon: "",
        title: "Tratamento Ativo",
        text: "Engajar-se plenamente no processo terapêutico, seja ambulatorial, intensivo ou em regime de internação quando necessário.",
    },
    Card {
        icon: "",
        title: "Manutenção",
        text: "Desenvolver estratégias de prevenção de recaída, cultivar hábitos saudáveis e manter conexões de suporte a longo prazo.",
    },
];

pub const EXPERIENCE: [&str; 4] = [
    "Primeira Clínica Pública do Estado do Rio de Janeiro (11 anos)",
    "Clínica Aldeia",
    "Casa de Saúde Saint Roman",
    "Comunidades Terapêuticas",
];

pub const EDUCATION: [&str; 4] = [
    "Psicólogo (CRP-05/83129)",
    "UNESA",
    "Conselheiro em Dependência Química",
    "Grupo Alívio (1999)",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub icon: &'static str,
    pub label: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink { icon: "📺", label: "YouTube", href: YOUTUBE_CHANNEL },
    SocialLink { icon: "📷", label: "Instagram", href: INSTAGRAM_PROFILE },
    SocialLink { icon: "👥", label: "Facebook", href: FACEBOOK_PROFILE },
];

#[derive(Debug, Clone, Serialize)]
pub struct Person {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    #[serde(rename = "jobTitle")]
    job_title: &'static str,
    url: &'static str,
}

/// schema.org `Article` embedded in the page head for search engines.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleMetadata {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    headline: &'static str,
    description: &'static str,
    author: Person,
    #[serde(rename = "datePublished")]
    date_published: String,
    image: &'static str,
    #[serde(rename = "articleBody")]
    article_body: &'static str,
}

impl ArticleMetadata {
    pub fn for_article() -> Self {
        Self {
            context: "https://schema.org",
            kind: "Article",
            headline: ARTICLE_TITLE,
            description: ARTICLE_DESCRIPTION,
            author: Person {
                kind: "Person",
                name: AUTHOR_NAME,
                job_title: AUTHOR_TITLE,
                url: YOUTUBE_CHANNEL,
            },
            date_published: published_on().format("%Y-%m-%d").to_string(),
            image: "https://via.placeholder.com/1200x630",
            article_body: "Conteúdo completo sobre adicção como doença cerebral...",
        }
    }

    pub fn to_json_ld(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_of_contents_ids_are_unique_and_start_at_intro() {
        let ids: HashSet<_> = TABLE_OF_CONTENTS.iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), TABLE_OF_CONTENTS.len());
        assert_eq!(TABLE_OF_CONTENTS[0].id, INITIAL_SECTION);
        assert!(!ids.contains("contato"));
    }

    #[test]
    fn video_filter_keeps_only_matching_category() {
        assert_eq!(videos_matching(None).len(), 3);

        let recovery = videos_matching(Some(VideoCategory::Recovery));
        assert_eq!(recovery.len(), 1);
        assert_eq!(recovery[0].id, "lQI0lsiqcZQ");

        for category in VideoCategory::ALL {
            assert!(videos_matching(Some(category)).iter().all(|v| v.category == category));
        }
    }

    #[test]
    fn publish_date_renders_in_portuguese() {
        assert_eq!(long_date_pt(published_on()), "10 de janeiro de 2025");
        let march = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        assert_eq!(long_date_pt(march), "1 de março de 2025");
    }

    #[test]
    fn json_ld_carries_fixed_article_fields() {
        let json = ArticleMetadata::for_article().to_json_ld().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["@context"], "https://schema.org");
        assert_eq!(value["@type"], "Article");
        assert_eq!(value["headline"], ARTICLE_TITLE);
        assert_eq!(value["datePublished"], "2025-01-10");
        assert_eq!(value["author"]["@type"], "Person");
        assert_eq!(value["author"]["name"], "Zander Aguiar");
        assert_eq!(value["author"]["jobTitle"], AUTHOR_TITLE);
        assert_eq!(value["author"]["url"], YOUTUBE_CHANNEL);
    }
}
