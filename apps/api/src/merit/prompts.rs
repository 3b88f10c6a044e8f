// All LLM prompt text for the merit statement generator.
// The two labels below are also the parser's split points; keep them in sync.

/// Label that precedes the summary paragraph ("merit summary").
pub const SUMMARY_LABEL: &str = "공적요지:";

/// Delimiter between the summary and the detailed sections ("merit details").
pub const DETAILS_LABEL: &str = "공적내용:";

/// Heading line that introduces the numbered merit list in the context block.
pub const CONTEXT_MERITS_HEADER: &str = "공적사항:";

/// Opening of the instruction block, up to and including the details label.
pub const INSTRUCTION_HEADER: &str = "입력된 정보를 바탕으로 상세한 공적조서를 작성해주세요. 다음의 형식을 정확히 따라주세요.

출력 형식:
공적요지: (전체 내용을 100자 내외로 요약한 단락. 주요 업적과 그 영향을 포함하여 구체적으로 작성)

공적내용: ";

/// One numbered subsection placeholder. Replace `{index}` before use.
pub const SECTION_PLACEHOLDER_TEMPLATE: &str = "

**[{index}번째 주제]**:
[상세 내용 - 300자 이상 상세히 기술]";

/// Writing rules appended after the subsection placeholders.
pub const WRITING_RULES: &str = "

작성 규칙:
1. 각 섹션 제목과 중요 키워드는 반드시 볼드처리(**) 사용
2. 각 섹션은 한 줄 띄워서 구분
3. 구체적인 날짜, 수치, 성과를 최대한 자세히 포함
4. 시간순 또는 중요도순으로 구성
5. 각 공적 내용은 다음 요소를 반드시 포함:
   - 구체적인 프로젝트/업무 내용
   - 수행 기간
   - 정량적 성과
   - 정성적 영향
   - 협력 기관 및 관계자
   - 혁신성과 창의성
   - 사회적/조직적 기여도
6. 각 공적사항별로 충분한 분량(300자 이상)으로 서술
7. 전체적으로 공적의 중요성과 파급효과가 부각되도록 작성
8. 모든 내용은 객관적 사실을 기반으로 구체적으로 기술
9. 입력된 각각의 공적사항을 별도의 섹션으로 작성
10. 각 섹션의 제목은 해당 공적사항의 핵심 주제를 반영하여 작성
11. 공적내용 제목은 공적요지 내용 후에 배치
";
