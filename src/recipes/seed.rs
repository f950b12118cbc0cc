use super::model::Recipe;

/// Example recipes a new session starts with.
pub fn seed_recipes() -> Vec<Recipe> {
    vec![
        recipe(
            "김치찌개",
            "얼큰하고 맛있는 한국인의 소울푸드",
            &[
                "잘 익은 김치 1/4포기",
                "돼지고기 (목살 또는 삼겹살) 200g",
                "두부 1/2모",
                "양파 1/4개",
                "대파 1/2대",
                "청양고추 1개 (선택 사항)",
                "멸치 다시마 육수 3컵",
                "고춧가루 1큰술",
                "다진 마늘 1/2큰술",
                "국간장 1작은술",
                "설탕 1/2작은술 (김치 신맛에 따라 조절)",
                "식용유 약간",
            ],
            &[
                "돼지고기는 먹기 좋게 썰고, 김치도 속을 털어내고 적당히 썬다.",
                "두부, 양파, 대파, 고추도 썰어 준비한다.",
                "냄비에 식용유를 두르고 돼지고기를 볶다가 김치를 넣고 함께 볶는다.",
                "멸치 다시마 육수를 붓고 고춧가루, 다진 마늘을 넣어 끓인다.",
                "찌개가 끓으면 양파와 두부를 넣고 한소끔 더 끓인다.",
                "국간장과 설탕으로 간을 맞춘다.",
                "마지막에 대파와 청양고추를 넣고 불을 끈다.",
            ],
            Some("https://img.khan.co.kr/news/2020/01/15/l_2020011601001866300140811.jpg"),
            &["한식", "찌개", "매운맛", "돼지고기", "김치"],
        ),
        recipe(
            "계란찜",
            "부드럽고 촉촉한 영양 만점 계란찜",
            &[
                "계란 3개",
                "물 또는 다시마 육수 150ml",
                "새우젓 1작은술 (또는 소금 약간)",
                "다진 파 약간",
                "참기름 약간 (선택 사항)",
            ],
            &[
                "계란을 볼에 풀고 물(육수)과 새우젓(소금)을 넣어 잘 섞는다.",
                "체에 한번 걸러 알끈을 제거하면 더 부드럽다.",
                "뚝배기나 내열 용기에 계란물을 붓는다.",
                "냄비에 물을 약간 넣고 용기를 올린 뒤 뚜껑을 닫고 중약불에서 10~15분간 찐다. (전자레인지 사용 시 랩을 씌우고 구멍을 뚫어 3~4분 돌린다)",
                "다 익으면 다진 파와 참기름을 뿌린다.",
            ],
            None,
            &["한식", "반찬", "간단", "아이들", "계란"],
        ),
        recipe(
            "알리오 올리오",
            "마늘과 올리브 오일의 풍미가 가득한 파스타",
            &[
                "스파게티 면 100g",
                "마늘 5-6쪽",
                "페페론치노 2-3개 (또는 건고추)",
                "올리브 오일 4큰술",
                "소금 약간",
                "후추 약간",
                "파슬리 가루 (선택 사항)",
                "면수 1/2컵",
            ],
            &[
                "끓는 물에 소금을 넣고 스파게티 면을 삶는다 (포장지 시간 참고). 면수는 버리지 않는다.",
                "마늘은 편으로 썰고, 페페론치노는 잘게 부순다.",
                "팬에 올리브 오일을 두르고 약불에서 마늘과 페페론치노를 볶아 향을 낸다.",
                "마늘이 노릇해지면 삶은 면과 면수 1/2컵을 넣고 빠르게 섞는다.",
                "오일과 면수가 유화되어 소스처럼 걸쭉해지면 소금, 후추로 간을 맞춘다.",
                "불을 끄고 파슬리 가루를 뿌려 마무리한다.",
            ],
            None,
            &["양식", "파스타", "간단", "마늘", "매콤"],
        ),
    ]
}

fn recipe(
    name: &str,
    description: &str,
    ingredients: &[&str],
    instructions: &[&str],
    image_url: Option<&str>,
    tags: &[&str],
) -> Recipe {
    Recipe {
        name: name.to_string(),
        description: description.to_string(),
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        instructions: instructions.iter().map(|s| s.to_string()).collect(),
        image_url: image_url.map(str::to_string),
        tags: tags.iter().map(|s| s.to_string()).collect(),
    }
}
