use log::error;
use yew::prelude::*;

use crate::booking::greeting_url;
use crate::components::contact_form::ContactForm;
use crate::components::table_of_contents::TableOfContents;
use crate::components::video_gallery::VideoGallery;
use crate::config;
use crate::content::{
    long_date_pt, published_on, ArticleMetadata, Card, ARTICLE_TITLE, AUTHOR_NAME, AUTHOR_TITLE,
    CHARACTERISTICS, DISEASE_SIGNS, EDUCATION, EXPERIENCE, FOUR_PILLARS, IMPACTS, LEARN_MORE_VIDEO,
    READING_TIME, RECOVERY_STEPS, RECREATIONAL_USE, RISK_FACTORS, SOCIAL_LINKS, THREE_PILLARS,
    YOUTUBE_CHANNEL,
};

#[function_component(StructuredData)]
fn structured_data() -> Html {
    match ArticleMetadata::for_article().to_json_ld() {
        Ok(json) => html! { <script type="application/ld+json">{json}</script> },
        Err(e) => {
            error!("Failed to serialize article metadata: {}", e);
            html! {}
        }
    }
}

fn numbered_list(items: &[Card], class: &'static str) -> Html {
    html! {
        <div class="numbered-list">
            { for items.iter().enumerate().map(|(idx, item)| html! {
                <div class={classes!("numbered-item", class)}>
                    <div class="numbered-badge">{(idx + 1).to_string()}</div>
                    <div>
                        <h4>{item.title}</h4>
                        <p>{item.text}</p>
                    </div>
                </div>
            }) }
        </div>
    }
}

fn check_list(items: &[&'static str], mark: &'static str, class: &'static str) -> Html {
    html! {
        <ul class={classes!("check-list", class)}>
            { for items.iter().map(|item| html! {
                <li><span class="check-mark">{mark}</span><span>{*item}</span></li>
            }) }
        </ul>
    }
}

#[function_component(Article)]
pub fn article() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let whatsapp = config::whatsapp_base_url();
    let greeting = greeting_url();

    html! {
        <div class="article-page">
            <StructuredData />
            <main class="article-layout">
                <TableOfContents />

                <article class="article-body">
                    // Hero
                    <section id="inicio" class="article-card hero-card">
                        <span class="topic-tag">{"Saúde Mental & Neurociência"}</span>
                        <h1>{ARTICLE_TITLE}</h1>
                        <p class="hero-lead">
                            {"A adicção não é uma falha moral ou falta de caráter. É uma doença crônica do cérebro, reconhecida pela ciência médica e pela Organização Mundial da Saúde. Compreender sua natureza complexa é o primeiro passo para o tratamento eficaz e a recuperação sustentável."}
                        </p>
                        <div class="hero-meta">
                            <span>{format!("📅 {}", long_date_pt(published_on()))}</span>
                            <span>{format!("⏱️ {}", READING_TIME)}</span>
                            <span>{format!("✍️ Por {}", AUTHOR_NAME)}</span>
                        </div>
                        <div class="hero-actions">
                            <a href="#videos" class="primary-button">{"▶ Assistir Vídeo"}</a>
                            <a href={YOUTUBE_CHANNEL} target="_blank" rel="noopener noreferrer" class="outline-button">
                                {"🔊 Ouvir Podcast"}
                            </a>
                        </div>
                    </section>

                    <section class="article-card">
                        <h2>{"O Que É Adicção: Muito Além do Uso"}</h2>
                        <p class="section-lead">
                            {"A adicção é uma condição neurobiológica caracterizada por três componentes essenciais que trabalham em conjunto, criando um ciclo difícil de romper sem intervenção adequada."}
                        </p>
                        <p>
                            {"Quando falamos de adicção, não estamos nos referindo ao uso ocasional ou recreativo de substâncias. Estamos descrevendo uma alteração profunda nos circuitos cerebrais que governam motivação, recompensa e tomada de decisão. Esta doença afeta pessoas de todas as idades, classes sociais e contextos culturais. Não discrimina, não escolhe, e certamente não é resultado de fraqueza pessoal. É uma condição médica que requer tratamento especializado, compaixão e compreensão."}
                        </p>
                        <div class="callout callout-blue">
                            <h3>{"Principais Características"}</h3>
                            { check_list(&CHARACTERISTICS, "✓", "check-blue") }
                        </div>
                    </section>

                    <section id="pilares" class="plain-section">
                        <h2>{"Os Três Pilares da Adicção"}</h2>
                        <div class="card-grid three">
                            { for THREE_PILLARS.iter().map(|pillar| html! {
                                <div class="tinted-card">
                                    <div class="card-icon">{pillar.icon}</div>
                                    <h3>{pillar.title}</h3>
                                    <p>{pillar.text}</p>
                                </div>
                            }) }
                        </div>
                        <p class="boxed-note">
                            {"Estes três elementos formam um ciclo auto-reforçador que perpetua a adicção. A obsessão alimenta a compulsão, que por sua vez intensifica o egocentrismo, criando um padrão de comportamento cada vez mais isolado e destrutivo."}
                        </p>
                    </section>

                    <section id="quatro-pilares" class="article-card">
                        <h2>{"Os Quatro Pilares Fundamentais"}</h2>
                        <p class="section-lead">
                            {"A neurociência identifica quatro características centrais que definem a adicção como doença cerebral. Cada pilar representa uma alteração específica no funcionamento neurológico."}
                        </p>
                        { numbered_list(&FOUR_PILLARS, "numbered-slate") }
                    </section>

                    <section id="neurociencia" class="article-card tinted-blue">
                        <h2>{"A Neurociência por Trás da Adicção"}</h2>
                        <h3>{"Como o Cérebro Muda"}</h3>
                        <p>
                            {"Estudos de neuroimagem revelam alterações estruturais e funcionais significativas no cérebro de pessoas com adicção. O córtex pré-frontal, responsável pelo julgamento e tomada de decisão, apresenta atividade reduzida."}
                        </p>
                        <p>
                            {"Simultaneamente, o sistema límbico, que processa emoções e recompensas, torna-se hiperativo na presença de estímulos relacionados à substância. Esta desregulação explica por que a força de vontade sozinha raramente é suficiente para superar a adicção."}
                        </p>
                        <p>
                            {"As vias dopaminérgicas são profundamente alteradas, criando um novo \"ponto de ajuste\" que torna experiências naturalmente prazerosas menos gratificantes, enquanto amplifica o desejo pela substância viciante."}
                        </p>
                        <div class="callout callout-green">
                            <p>
                                <strong>{"✓ Importante:"}</strong>
                                {" Estas mudanças cerebrais não são permanentes. Com tratamento adequado, abstinência sustentada e suporte terapêutico, o cérebro pode recuperar grande parte de sua funcionalidade normal através da neuroplasticidade."}
                            </p>
                        </div>
                    </section>

                    <section id="uso-vs-doenca" class="article-card">
                        <h2>{"Uso vs Doença: Uma Distinção Crítica"}</h2>
                        <div class="card-grid two">
                            <div class="compare-card compare-ok">
                                <h3>{"Uso Recreativo ou Social"}</h3>
                                { check_list(&RECREATIONAL_USE, "✓", "check-green") }
                            </div>
                            <div class="compare-card compare-bad">
                                <h3>{"Adicção como Doença"}</h3>
                                { check_list(&DISEASE_SIGNS, "✗", "check-red") }
                            </div>
                        </div>
                        <p class="boxed-note">
                            {"A linha entre uso e doença pode ser sutil inicialmente, mas com o tempo, a diferença torna-se inconfundível. A adicção não surge de repente; é um processo gradual onde o controle vai se perdendo progressivamente. Reconhecer esta transição precocemente aumenta significativamente as chances de recuperação bem-sucedida."}
                        </p>
                    </section>

                    <section id="fatores-risco" class="article-card">
                        <h2>{"Fatores de Risco e Vulnerabilidade"}</h2>
                        <p class="section-lead">
                            {"A adicção não escolhe suas vítimas aleatoriamente. Diversos fatores aumentam a vulnerabilidade de uma pessoa desenvolver esta doença. Compreender estes fatores não é sobre culpar ou julgar, mas sobre identificar quem pode precisar de maior atenção e suporte preventivo."}
                        </p>
                        <div class="card-grid two">
                            { for RISK_FACTORS.iter().map(|factor| html! {
                                <div class="tinted-card">
                                    <div class="card-icon">{factor.icon}</div>
                                    <h4>{factor.title}</h4>
                                    <p>{factor.text}</p>
                                </div>
                            }) }
                        </div>
                    </section>

                    <section id="impacto" class="article-card tinted-orange">
                        <h2>{"O Impacto Multidimensional da Adicção"}</h2>
                        <p class="section-lead">
                            {"A adicção não afeta apenas o indivíduo que sofre com ela. Como uma pedra jogada na água, suas consequências se espalham em ondas concêntricas, impactando famílias inteiras, comunidades e a sociedade."}
                        </p>
                        { for IMPACTS.iter().map(|impact| html! {
                            <div class="impact-item">
                                <h4>{impact.title}</h4>
                                <p>{impact.text}</p>
                            </div>
                        }) }
                        <div class="callout callout-green">
                            <p>
                                <strong>{"✓ Boa notícia:"}</strong>
                                {" Com tratamento adequado e suporte contínuo, é possível reverter muitos destes impactos e reconstruir uma vida plena e significativa."}
                            </p>
                        </div>
                    </section>

                    <section id="recuperacao" class="article-card">
                        <h2>{"Caminhos para a Recuperação"}</h2>
                        <p class="section-lead">
                            {"A recuperação da adicção é não apenas possível, mas alcançável com as ferramentas e suporte adequados. Não existe um único caminho para todos; cada jornada de recuperação é única e deve ser personalizada às necessidades individuais."}
                        </p>
                        { numbered_list(&RECOVERY_STEPS, "numbered-teal") }
                        <div class="callout callout-blue">
                            <p>
                                <strong>{"Importante:"}</strong>
                                {" A recuperação não é linear. Recaídas podem ocorrer e devem ser vistas não como fracassos, mas como oportunidades de aprendizado e ajuste do plano de tratamento. O que importa é perseverar com compaixão e determinação."}
                            </p>
                        </div>
                    </section>

                    <section id="recursos" class="article-card tinted-green">
                        <h2>{"Recursos e Próximos Passos"}</h2>
                        <p class="section-lead">
                            {"Se você ou alguém que você ama está lutando contra a adicção, saiba que não está sozinho e que ajuda está disponível. O primeiro passo é sempre o mais difícil, mas é também o mais importante e corajoso que você pode dar."}
                        </p>
                        <div class="card-grid three">
                            <div class="resource-card">
                                <div class="card-icon">{"📞"}</div>
                                <h3>{"CVV - Centro de Valorização da Vida"}</h3>
                                <p class="resource-summary">{"Apoio emocional e prevenção do suicídio"}</p>
                                <p class="resource-highlight">{"☎️ 188 (24h, gratuito)"}</p>
                                <p class="resource-note">{"Telefone, email e chat"}</p>
                                <a href="tel:188" class="resource-button">{"Ligar Agora"}</a>
                            </div>
                            <div class="resource-card">
                                <div class="card-icon">{"🏥"}</div>
                                <h3>{"CAPS-AD"}</h3>
                                <p class="resource-summary">{"Centros de Atenção Psicossocial"}</p>
                                <p class="resource-highlight">{"Atendimento Gratuito"}</p>
                                <p class="resource-note">{"SUS em todo Brasil"}</p>
                                <a href="https://www.gov.br/saude/pt-br" target="_blank" rel="noopener noreferrer" class="resource-button">
                                    {"Saiba Mais"}
                                </a>
                            </div>
                            <div class="resource-card">
                                <div class="card-icon">{"👥"}</div>
                                <h3>{"Grupos de Apoio"}</h3>
                                <p class="resource-summary">{"NA, AA e Naranon para familiares"}</p>
                                <a href="https://www.na.org.br/" target="_blank" rel="noopener noreferrer" class="resource-link">
                                    {"🔗 NA (Pacientes)"}
                                </a>
                                <a href="https://www.naranon.org.br/" target="_blank" rel="noopener noreferrer" class="resource-link">
                                    {"🔗 Naranon (Familiares)"}
                                </a>
                                <p class="resource-note">{"Reuniões gratuitas em diversas cidades"}</p>
                            </div>
                        </div>
                        <blockquote class="resource-quote">
                            {"\"A adicção é a única prisão onde as correntes são invisíveis e a chave está dentro de você. A recuperação é possível, e você merece uma vida livre e plena.\""}
                        </blockquote>
                        <div class="cta-row">
                            <a href={greeting.clone()} target="_blank" rel="noopener noreferrer" class="green-button">
                                {"Ajuda Profissional"}
                            </a>
                            <a href={LEARN_MORE_VIDEO} target="_blank" rel="noopener noreferrer" class="outline-button">
                                {"Saiba Mais"}
                            </a>
                        </div>
                    </section>

                    <section id="autor" class="author-card">
                        <h2>{"Sobre o Autor"}</h2>
                        <div class="author-layout">
                            <div class="author-avatar">{"👨‍⚕️"}</div>
                            <div class="author-details">
                                <h3>{AUTHOR_NAME}</h3>
                                <p class="author-role">{AUTHOR_TITLE}</p>
                                <h4>{"Mais de 20 Anos Ajudando Pessoas na Recuperação"}</h4>
                                <p>
                                    {"Sou Zander Aguiar, Psicólogo e Conselheiro em Dependência Química, com mais de 20 anos de experiência dedicados à recuperação e ao cuidado em saúde mental. Minha trajetória une prática clínica, ensino e atuação direta com dependentes químicos e suas famílias, sempre com um olhar humano, ético e comprometido com o processo de transformação pessoal."}
                                </p>
                                <div class="card-grid two">
                                    <div class="author-box">
                                        <h5>{"💼 Experiência Profissional"}</h5>
                                        <ul>{ for EXPERIENCE.iter().map(|item| html! { <li>{format!("• {}", item)}</li> }) }</ul>
                                    </div>
                                    <div class="author-box">
                                        <h5>{"🎓 Formação"}</h5>
                                        <ul>{ for EDUCATION.iter().map(|item| html! { <li>{format!("• {}", item)}</li> }) }</ul>
                                    </div>
                                </div>
                                <p>
                                    {"Especialista na aplicação dos 12 Passos no tratamento da dependência química, com foco em transformação pessoal e recuperação sustentável."}
                                </p>
                                <div class="social-row">
                                    { for SOCIAL_LINKS.iter().map(|link| html! {
                                        <a href={link.href} target="_blank" rel="noopener noreferrer" class="social-pill">
                                            <span>{link.icon}</span>{" "}{link.label}
                                        </a>
                                    }) }
                                    <a href={whatsapp.clone()} target="_blank" rel="noopener noreferrer" class="social-pill">
                                        <span>{"💬"}</span>{" WhatsApp"}
                                    </a>
                                </div>
                            </div>
                        </div>
                    </section>

                    <VideoGallery />

                    <ContactForm />

                    <section class="article-card closing-cta">
                        <h2>{"Pronto para Começar sua Jornada de Recuperação?"}</h2>
                        <p>
                            {"Entre em contato comigo através do WhatsApp ou redes sociais. Estou aqui para ajudar você ou alguém que você ama."}
                        </p>
                        <div class="cta-row centered">
                            <a href={whatsapp.clone()} target="_blank" rel="noopener noreferrer" class="green-button">
                                {"📞 Conversar no WhatsApp"}
                            </a>
                            <a href="#contato" class="outline-button">{"Enviar Email"}</a>
                        </div>
                    </section>
                </article>
            </main>

            <footer class="site-footer">
                <div class="footer-grid">
                    <div>
                        <h4>{AUTHOR_NAME}</h4>
                        <p>{"Psicólogo e Conselheiro em Dependência Química com 20+ anos de experiência."}</p>
                    </div>
                    <div>
                        <h4>{"Recursos"}</h4>
                        <ul>
                            <li><a href="#recursos">{"Ajuda Profissional"}</a></li>
                            <li><a href="#recuperacao">{"Recuperação"}</a></li>
                            <li><a href="#neurociencia">{"Neurociência"}</a></li>
                        </ul>
                    </div>
                    <div>
                        <h4>{"Redes Sociais"}</h4>
                        <ul>
                            { for SOCIAL_LINKS.iter().map(|link| html! {
                                <li><a href={link.href} target="_blank" rel="noopener noreferrer">{link.label}</a></li>
                            }) }
                        </ul>
                    </div>
                    <div>
                        <h4>{"Contato"}</h4>
                        <a href={whatsapp} target="_blank" rel="noopener noreferrer">
                            {format!("📞 {}", config::WHATSAPP_DISPLAY_NUMBER)}
                        </a>
                    </div>
                </div>
                <p class="footer-legal">
                    {"© 2025 Zander Aguiar. Todos os direitos reservados. | Artigo sobre Adicção como Doença Cerebral"}
                </p>
            </footer>

            <a href={greeting} target="_blank" rel="noopener noreferrer" class="floating-whatsapp" title="Conversar com Zander no WhatsApp">
                {"📞"}
            </a>

            <style>
                {r#"
                .article-page {
                    min-height: 100vh;
                    background: linear-gradient(135deg, #f8fafc, #eff6ff 50%, #f0fdfa);
                    color: #0f172a;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }
                .article-layout {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 3rem 1.5rem;
                    display: grid;
                    grid-template-columns: 1fr 3fr;
                    gap: 2rem;
                }
                .toc-card {
                    position: sticky;
                    top: 6rem;
                    background: #fff;
                    border: 1px solid #e2e8f0;
                    border-radius: 12px;
                    padding: 1.5rem;
                    box-shadow: 0 4px 12px rgba(15, 23, 42, 0.06);
                }
                .toc-card h2 {
                    font-size: 1.1rem;
                    margin-bottom: 1rem;
                }
                .toc-link {
                    display: block;
                    padding: 0.5rem 0.75rem;
                    border-radius: 8px;
                    font-size: 0.9rem;
                    color: #475569;
                    text-decoration: none;
                    transition: background 0.2s ease;
                }
                .toc-link:hover {
                    background: #f1f5f9;
                }
                .toc-link.active {
                    background: #dbeafe;
                    color: #1d4ed8;
                    font-weight: 600;
                }
                .article-body {
                    display: flex;
                    flex-direction: column;
                    gap: 3rem;
                }
                .article-card, .booking-section {
                    background: #fff;
                    border: 1px solid #e2e8f0;
                    border-radius: 16px;
                    padding: 3rem;
                    box-shadow: 0 8px 24px rgba(15, 23, 42, 0.08);
                }
                .article-card h2, .plain-section h2, .booking-section h2 {
                    font-size: 1.9rem;
                    margin-bottom: 1.5rem;
                }
                .article-card p {
                    color: #475569;
                    line-height: 1.7;
                }
                .section-lead {
                    font-size: 1.05rem;
                    margin-bottom: 2rem;
                }
                .hero-card h1 {
                    font-size: 3rem;
                    line-height: 1.15;
                    margin: 1.5rem 0;
                }
                .topic-tag, .video-card-tag span {
                    display: inline-block;
                    padding: 0.4rem 1rem;
                    background: #dbeafe;
                    color: #1d4ed8;
                    border-radius: 999px;
                    font-size: 0.85rem;
                    font-weight: 600;
                }
                .hero-lead {
                    font-size: 1.25rem;
                }
                .hero-meta, .hero-actions, .cta-row, .social-row {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    margin-top: 1.5rem;
                }
                .cta-row.centered {
                    justify-content: center;
                }
                .primary-button, .green-button, .outline-button, .resource-button, .subscribe-button {
                    display: inline-block;
                    padding: 0.7rem 1.4rem;
                    border-radius: 8px;
                    font-weight: 600;
                    text-decoration: none;
                    transition: background 0.2s ease;
                }
                .primary-button { background: #2563eb; color: #fff; }
                .primary-button:hover { background: #1d4ed8; }
                .green-button, .resource-button { background: #16a34a; color: #fff; }
                .green-button:hover, .resource-button:hover { background: #15803d; }
                .subscribe-button { background: #dc2626; color: #fff; }
                .outline-button { border: 1px solid #cbd5e1; color: #0f172a; }
                .callout {
                    border-left: 4px solid #2563eb;
                    border-radius: 12px;
                    padding: 1.5rem;
                    margin-top: 2rem;
                }
                .callout-blue { background: linear-gradient(90deg, #eff6ff, #f0fdfa); }
                .callout-green { background: #fff; border-left-color: #22c55e; }
                .callout-green strong { color: #15803d; }
                .check-list {
                    list-style: none;
                    padding: 0;
                }
                .check-list li {
                    display: flex;
                    gap: 0.75rem;
                    margin-bottom: 0.75rem;
                }
                .check-blue .check-mark { color: #2563eb; font-weight: 700; }
                .check-green .check-mark { color: #16a34a; }
                .check-red .check-mark { color: #dc2626; }
                .card-grid {
                    display: grid;
                    gap: 1.5rem;
                }
                .card-grid.two { grid-template-columns: repeat(2, 1fr); }
                .card-grid.three { grid-template-columns: repeat(3, 1fr); }
                .tinted-card, .resource-card, .compare-card {
                    border-radius: 12px;
                    padding: 1.5rem;
                    border: 1px solid #e2e8f0;
                    background: linear-gradient(135deg, #f8fafc, #eff6ff);
                }
                .resource-card {
                    background: #fff;
                    border-color: #bbf7d0;
                    display: flex;
                    flex-direction: column;
                }
                .resource-summary { flex-grow: 1; }
                .resource-highlight { font-weight: 700; color: #15803d; }
                .resource-note { font-size: 0.8rem; color: #64748b; }
                .resource-link {
                    display: block;
                    color: #15803d;
                    font-weight: 600;
                    text-decoration: none;
                }
                .resource-quote {
                    background: #fff;
                    border: 1px solid #bbf7d0;
                    border-radius: 12px;
                    padding: 1.5rem;
                    font-style: italic;
                    text-align: center;
                    margin: 2rem 0;
                }
                .compare-ok { background: linear-gradient(135deg, #f0fdf4, #ecfdf5); border-color: #bbf7d0; }
                .compare-bad { background: linear-gradient(135deg, #fef2f2, #fff1f2); border-color: #fecaca; }
                .card-icon { font-size: 2.2rem; margin-bottom: 0.75rem; }
                .boxed-note {
                    background: #f8fafc;
                    border: 1px solid #e2e8f0;
                    border-radius: 12px;
                    padding: 1.5rem;
                    margin-top: 2rem;
                    color: #475569;
                }
                .numbered-list {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .numbered-item {
                    display: flex;
                    gap: 1rem;
                    padding: 1rem;
                    border-radius: 12px;
                    border: 1px solid #e2e8f0;
                }
                .numbered-slate { background: linear-gradient(90deg, #f8fafc, #eff6ff); }
                .numbered-teal { background: linear-gradient(90deg, #eff6ff, #f0fdfa); border-color: #bfdbfe; }
                .numbered-badge {
                    flex-shrink: 0;
                    width: 2.25rem;
                    height: 2.25rem;
                    border-radius: 50%;
                    background: linear-gradient(135deg, #2563eb, #0d9488);
                    color: #fff;
                    font-weight: 700;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .tinted-blue { background: linear-gradient(135deg, #eff6ff, #ecfeff); border-color: #bfdbfe; }
                .tinted-orange { background: linear-gradient(135deg, #fff7ed, #fef2f2); border-color: #fed7aa; }
                .tinted-green { background: linear-gradient(135deg, #f0fdf4, #ecfdf5); border-color: #bbf7d0; }
                .impact-item {
                    background: #fff;
                    border: 1px solid #fed7aa;
                    border-radius: 12px;
                    padding: 1.5rem;
                    margin-bottom: 1rem;
                }
                .author-card {
                    background: linear-gradient(135deg, #2563eb, #0d9488);
                    color: #fff;
                    border-radius: 16px;
                    padding: 3rem;
                }
                .author-layout {
                    display: flex;
                    gap: 2rem;
                    align-items: flex-start;
                }
                .author-avatar {
                    flex-shrink: 0;
                    width: 8rem;
                    height: 8rem;
                    border-radius: 12px;
                    background: rgba(255, 255, 255, 0.2);
                    font-size: 3rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .author-role { color: #dbeafe; font-size: 1.1rem; }
                .author-details p { color: #dbeafe; line-height: 1.7; }
                .author-box {
                    background: rgba(255, 255, 255, 0.1);
                    border-radius: 8px;
                    padding: 1rem;
                }
                .author-box ul { list-style: none; padding: 0; color: #dbeafe; font-size: 0.9rem; }
                .social-pill {
                    display: inline-flex;
                    gap: 0.5rem;
                    background: rgba(255, 255, 255, 0.2);
                    padding: 0.5rem 1rem;
                    border-radius: 8px;
                    color: #fff;
                    text-decoration: none;
                }
                .social-pill:hover { background: rgba(255, 255, 255, 0.3); }
                .video-chips {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.75rem;
                    margin-bottom: 2rem;
                }
                .video-chip {
                    padding: 0.5rem 1rem;
                    border: none;
                    border-radius: 999px;
                    background: #e2e8f0;
                    color: #334155;
                    font-weight: 600;
                    cursor: pointer;
                }
                .video-chip.selected { background: #2563eb; color: #fff; }
                .video-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .video-card {
                    display: flex;
                    flex-direction: column;
                    border: 1px solid #e2e8f0;
                    border-radius: 12px;
                    overflow: hidden;
                    background: linear-gradient(135deg, #f8fafc, #eff6ff);
                }
                .video-card-tag { padding: 1rem 1.5rem 0.5rem; }
                .video-frame {
                    position: relative;
                    width: 100%;
                    padding-bottom: 56.25%;
                    background: #000;
                }
                .video-frame iframe {
                    position: absolute;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 100%;
                }
                .video-info {
                    padding: 1.5rem;
                    display: flex;
                    flex-direction: column;
                    flex-grow: 1;
                }
                .video-info p { flex-grow: 1; font-size: 0.9rem; }
                .video-meta {
                    display: flex;
                    justify-content: space-between;
                    border-top: 1px solid #e2e8f0;
                    padding-top: 1rem;
                    font-size: 0.85rem;
                }
                .video-meta a { color: #2563eb; font-weight: 600; text-decoration: none; }
                .video-placeholder {
                    margin-top: 2rem;
                    padding: 1.5rem;
                    text-align: center;
                    background: #eff6ff;
                    border: 2px dashed #93c5fd;
                    border-radius: 12px;
                }
                .video-placeholder-icon { font-size: 1.6rem; }
                .booking-section {
                    background: linear-gradient(135deg, #eff6ff, #f0fdfa);
                    border-color: #bfdbfe;
                }
                .booking-section h2, .booking-intro, .booking-footnote { text-align: center; }
                .booking-intro { color: #475569; margin-bottom: 2rem; }
                .booking-footnote { font-size: 0.8rem; color: #64748b; margin-top: 1.5rem; }
                .booking-success {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 1.5rem;
                    padding: 1rem;
                    background: #f0fdf4;
                    border: 1px solid #bbf7d0;
                    border-radius: 8px;
                    color: #15803d;
                    font-weight: 600;
                }
                .booking-form {
                    max-width: 42rem;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .booking-row {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 1rem;
                }
                .booking-field label {
                    display: block;
                    font-size: 0.9rem;
                    font-weight: 600;
                    margin-bottom: 0.5rem;
                }
                .booking-field input, .booking-field textarea {
                    width: 100%;
                    padding: 0.75rem 1rem;
                    border-radius: 8px;
                    border: 1px solid #cbd5e1;
                    box-sizing: border-box;
                    font: inherit;
                }
                .booking-field textarea { resize: none; }
                .booking-input.has-error { border-color: #ef4444; }
                .booking-error { color: #dc2626; font-size: 0.75rem; margin-top: 0.25rem; }
                .booking-actions {
                    display: flex;
                    gap: 1rem;
                    padding-top: 1rem;
                }
                .booking-submit, .booking-reset {
                    flex: 1;
                    padding: 0.8rem;
                    border-radius: 8px;
                    font-weight: 600;
                    cursor: pointer;
                }
                .booking-submit { background: #2563eb; color: #fff; border: none; }
                .booking-submit:hover { background: #1d4ed8; }
                .booking-reset { background: transparent; border: 1px solid #cbd5e1; }
                .closing-cta { text-align: center; }
                .site-footer {
                    background: #0f172a;
                    color: #cbd5e1;
                    margin-top: 5rem;
                    padding: 3rem 1.5rem;
                }
                .footer-grid {
                    max-width: 1280px;
                    margin: 0 auto 2rem;
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                }
                .footer-grid h4 { color: #fff; margin-bottom: 1rem; }
                .footer-grid ul { list-style: none; padding: 0; }
                .footer-grid a { color: #cbd5e1; text-decoration: none; font-size: 0.9rem; }
                .footer-grid a:hover { color: #fff; }
                .footer-legal {
                    border-top: 1px solid #334155;
                    padding-top: 2rem;
                    text-align: center;
                    font-size: 0.85rem;
                }
                .floating-whatsapp {
                    position: fixed;
                    bottom: 1.5rem;
                    right: 1.5rem;
                    z-index: 40;
                    width: 3.5rem;
                    height: 3.5rem;
                    border-radius: 50%;
                    background: #22c55e;
                    color: #fff;
                    font-size: 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-decoration: none;
                    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.2);
                    animation: bounce 1s infinite;
                }
                @keyframes bounce {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(-25%); }
                }
                @media (max-width: 1024px) {
                    .article-layout { grid-template-columns: 1fr; }
                    .toc-card { position: static; }
                }
                @media (max-width: 768px) {
                    .article-card, .booking-section, .author-card { padding: 2rem; }
                    .hero-card h1 { font-size: 2.2rem; }
                    .card-grid.two, .card-grid.three, .video-grid, .booking-row, .footer-grid {
                        grid-template-columns: 1fr;
                    }
                    .author-layout { flex-direction: column; }
                }
                "#}
            </style>
        </div>
    }
}
