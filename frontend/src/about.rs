use yew::prelude::*;

// (title, text) for each of the cards under the story
const VALUES: [(&str, &str); 3] = [
	(
		"Feito com Amor",
		"Cada doce é preparado artesanalmente, com ingredientes selecionados e muito carinho. \
		Acreditamos que o amor é o ingrediente secreto que faz toda a diferença.",
	),
	(
		"Qualidade Premium",
		"Não abrimos mão da qualidade. Do chocolate belga às macadâmias crocantes, cada \
		ingrediente é escolhido para proporcionar uma experiência única.",
	),
	(
		"Personalização",
		"Cada cliente é único, e seus pedidos também devem ser. Oferecemos personalização \
		completa para tornar seu momento ainda mais especial.",
	),
];

#[function_component(About)]
pub fn about() -> Html {
	html! {
		<section id="sobre">
			<h2>{ "Sobre a Bibbidi Brownie" }</h2>
			<p class="hint">{ "\"Onde cada pedaço conta uma história de amor, carinho e sabor\"" }</p>
			<div class="card">
				<h3>{ "Nossa História" }</h3>
				<p>
					{ "A " }<strong>{ "Bibbidi Brownie" }</strong>
					{ " nasceu em 2020, durante a pandemia. Tudo começou quando decidimos ajudar amigos \
					que tinham um Hostel em Botafogo e estavam enfrentando dificuldades. Eles começaram a \
					vender hambúrgueres por delivery e precisavam de uma sobremesa para completar o cardápio." }
				</p>
				<p>
					{ "Foi aí que entramos com os brownies. Começamos a produzir em casa, testando receitas \
					na nossa própria cozinha. Logo percebemos que tínhamos algo especial nas mãos. O que era \
					para ser apenas uma ajuda a amigos virou nossa paixão, e nosso negócio." }
				</p>
				<p><strong>
					{ "Nossa missão é trazer felicidade ao paladar para o maior número de pessoas do Brasil." }
				</strong></p>
				<p>
					{ "O nosso diferencial está nos sabores. Enquanto a maioria faz brownies de um sabor só \
					e varia os recheios, nós criamos uma receita única e específica para cada sabor. Além dos \
					brownies, que são nosso carro-chefe, fazemos Cookies, Banoffe, Biscoitos e outras delícias \
					sazonais." }
				</p>
				<p>
					{ "Nossa produção fica na Tijuca e atendemos todo o Brasil. Cada doce que sai daqui leva \
					um pouco da nossa história, e a gente espera fazer parte da sua também." }
				</p>
			</div>
			<div class="product-grid">
			{
				VALUES.iter().map(|(title, text)| html! {
					<div class="card">
						<h3>{ *title }</h3>
						<p>{ *text }</p>
					</div>
				}).collect::<Html>()
			}
			</div>
			<h3>{ "O Que Nos Move" }</h3>
			<p>
				{ "Nossa maior recompensa é saber que nossos doces fazem parte dos seus momentos felizes: \
				aniversários, comemorações, presentes especiais ou simplesmente aquele momento de pausa \
				para se presentear com algo delicioso." }
			</p>
			<p><strong>{ "Feito com carinho, pensado para você. 🤎" }</strong></p>
		</section>
	}
}
