//! Prompt templates for the three generated artifacts
//!
//! Each builder embeds course metadata, the module title and the topic
//! title into an instruction-plus-example prompt. The wording is Portuguese
//! because the generated material is.

use crate::model::{MetadadosCurso, Modulo, NucleoConceitual};

/// Prompt for the educational content of a topic
pub fn conteudo_prompt(
    metadata: &MetadadosCurso,
    modulo: &Modulo,
    nucleo: &NucleoConceitual,
) -> String {
    let curso = &metadata.codigo_nome;
    let publico = &metadata.descricao_publico;
    let objetivos = metadata.objetivos.join(", ");
    let modulo_titulo = &modulo.titulo;
    let titulo = &nucleo.titulo;

    format!(
        "### Gere um conteúdo educacional para um Núcleo Conceitual de um curso universitário.\n\
         \n\
         **Informações do Curso:**\n\
         * **Nome do Curso:** {curso}\n\
         * **Descrição do Público:** {publico}\n\
         * **Objetivos de Aprendizagem:** {objetivos}\n\
         \n\
         **Informações do Módulo:**\n\
         * **Título do Módulo:** {modulo_titulo}\n\
         \n\
         **Informações do Núcleo Conceitual:**\n\
         * **Título do Núcleo Conceitual:** {titulo}\n\
         \n\
         **Exemplo de Conteúdo:**\n\
         \n\
         ## Introdução\n\
         Este Núcleo Conceitual aborda...\n\
         \n\
         ### Subtópico 1\n\
         * Detalhe 1\n\
         * Detalhe 2\n\
         * Exemplo: ...\n\
         \n\
         ## Conclusão\n\
         Em resumo...\n\
         \n\
         **Conteúdo Gerado:**\n\
         \n\
         ## {titulo}\n\
         \n\
         (Insira aqui o conteúdo educacional. Siga o exemplo acima.\n\
         Seja conciso, claro e envolvente.)"
    )
}

/// Prompt for the short-video script of a topic
pub fn video_script_prompt(
    metadata: &MetadadosCurso,
    modulo: &Modulo,
    nucleo: &NucleoConceitual,
) -> String {
    let curso = &metadata.codigo_nome;
    let publico = &metadata.descricao_publico;
    let objetivos = metadata.objetivos.join(", ");
    let modulo_titulo = &modulo.titulo;
    let titulo = &nucleo.titulo;

    format!(
        "### Crie um roteiro para um vídeo educacional curto e envolvente.\n\
         \n\
         **Informações do Curso:**\n\
         * **Nome do Curso:** {curso}\n\
         * **Descrição do Público:** {publico}\n\
         * **Objetivos de Aprendizagem:** {objetivos}\n\
         \n\
         **Informações do Módulo:**\n\
         * **Título do Módulo:** {modulo_titulo}\n\
         \n\
         **Informações do Núcleo Conceitual:**\n\
         * **Título do Núcleo Conceitual:** {titulo}\n\
         \n\
         **Exemplo de Roteiro:**\n\
         \n\
         ## Introdução (0:00-0:30)\n\
         * **Visual:** Uma animação do título do curso e do módulo.\n\
         * **Narração:** Olá! Bem-vindos ao curso {curso}. Neste vídeo, vamos explorar \
         {titulo}, um tópico fundamental em {modulo_titulo}.\n\
         \n\
         ## Conceitos-Chave (0:30-3:00)\n\
         * **Visual:** Gráficos e diagramas ilustrando os conceitos-chave.\n\
         * **Narração:** (Explique os conceitos-chave de forma clara e concisa, usando \
         exemplos relevantes para o público-alvo.)\n\
         \n\
         ## Aplicação Prática (3:00-4:00)\n\
         * **Visual:** Cenas mostrando exemplos práticos da aplicação dos conceitos.\n\
         * **Narração:** (Demonstre como os conceitos aprendidos podem ser aplicados na prática.)\n\
         \n\
         ## Conclusão (4:00-4:30)\n\
         * **Visual:** Um resumo dos pontos principais abordados no vídeo.\n\
         * **Narração:** (Recapitule os pontos-chave e incentive os alunos a explorar mais o assunto.)\n\
         \n\
         **Roteiro Gerado:**\n\
         \n\
         ## {titulo}\n\
         \n\
         (Insira aqui o roteiro do vídeo. Siga o exemplo acima.\n\
         Seja criativo e envolvente.)"
    )
}

/// Prompt for the teleprompter text of a topic.
///
/// Unlike the other two, this one embeds the already generated educational
/// content so the spoken text tracks what the material actually covers.
pub fn teleprompter_prompt(
    metadata: &MetadadosCurso,
    modulo: &Modulo,
    nucleo: &NucleoConceitual,
    conteudo: &str,
) -> String {
    let curso = &metadata.codigo_nome;
    let publico = &metadata.descricao_publico;
    let modulo_titulo = &modulo.titulo;
    let titulo = &nucleo.titulo;

    format!(
        "### Crie um texto para teleprompter para um vídeo educacional.\n\
         \n\
         **Informações do Curso:**\n\
         * **Nome do Curso:** {curso}\n\
         * **Descrição do Público:** {publico}\n\
         \n\
         **Informações do Módulo:**\n\
         * **Título do Módulo:** {modulo_titulo}\n\
         \n\
         **Informações do Núcleo Conceitual:**\n\
         * **Título do Núcleo Conceitual:** {titulo}\n\
         \n\
         **Conteúdo do Núcleo Conceitual:**\n\
         {conteudo}\n\
         \n\
         **Exemplo de Texto para Teleprompter:**\n\
         \n\
         Olá a todos! Sejam bem-vindos ao curso {curso}. Hoje, vamos mergulhar em {titulo}, \
         um tópico essencial em {modulo_titulo}.\n\
         (Continue o texto para teleprompter, adaptando o conteúdo do Núcleo Conceitual.\n\
         Seja claro, conciso e mantenha um tom amigável e convidativo.)\n\
         \n\
         **Texto para Teleprompter Gerado:**\n\
         \n\
         (Insira aqui o texto para teleprompter. Siga o exemplo acima.\n\
         Mantenha um tom natural e fácil de ler em voz alta.)"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures;

    #[test]
    fn test_conteudo_prompt_embeds_course_and_topic() {
        let metadata = fixtures::metadados();
        let modulo = Modulo::new("Fundamentos".to_string());
        let nucleo = NucleoConceitual::new("Frações".to_string());

        let prompt = conteudo_prompt(&metadata, &modulo, &nucleo);
        assert!(prompt.contains("MAT101 Matemática Básica"));
        assert!(prompt.contains("Estudantes do primeiro período"));
        assert!(prompt.contains("Dominar operações básicas, Resolver equações"));
        assert!(prompt.contains("* **Título do Módulo:** Fundamentos"));
        // The topic title appears both in the briefing and as the heading
        // the model is asked to continue from.
        assert_eq!(prompt.matches("Frações").count(), 2);
        assert!(prompt.ends_with("Seja conciso, claro e envolvente.)"));
    }

    #[test]
    fn test_video_script_prompt_has_timed_sections() {
        let metadata = fixtures::metadados();
        let modulo = Modulo::new("Equações".to_string());
        let nucleo = NucleoConceitual::new("Equações de primeiro grau".to_string());

        let prompt = video_script_prompt(&metadata, &modulo, &nucleo);
        assert!(prompt.contains("## Introdução (0:00-0:30)"));
        assert!(prompt.contains("## Conceitos-Chave (0:30-3:00)"));
        assert!(prompt.contains("## Aplicação Prática (3:00-4:00)"));
        assert!(prompt.contains("## Conclusão (4:00-4:30)"));
        assert!(prompt.contains(
            "Olá! Bem-vindos ao curso MAT101 Matemática Básica. Neste vídeo, vamos explorar \
             Equações de primeiro grau, um tópico fundamental em Equações."
        ));
    }

    #[test]
    fn test_teleprompter_prompt_embeds_generated_content() {
        let metadata = fixtures::metadados();
        let modulo = Modulo::new("Fundamentos".to_string());
        let nucleo = NucleoConceitual::new("Frações".to_string());
        let conteudo = "## Frações\nUma fração representa uma parte de um todo.";

        let prompt = teleprompter_prompt(&metadata, &modulo, &nucleo, conteudo);
        assert!(prompt.contains("**Conteúdo do Núcleo Conceitual:**"));
        assert!(prompt.contains(conteudo));
        // The spoken text is driven by the content, not the objectives list.
        assert!(!prompt.contains("Objetivos de Aprendizagem"));
    }
}
