//! Snapshot tests for Java and MyBatis emission.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use serde_json::json;
use typegen_codegen::testing::{mssql_accounts, mysql_users, postgres_orders, stream};
use typegen_codegen::{EmitContext, Emitter};
use typegen_codegen_java::{
    JavaDtoEmitter, JavaRecordEmitter, MyBatisAnnotationEmitter, MyBatisXmlEmitter,
};
use typegen_core::Engine;

#[test]
fn test_mysql_dto_with_every_option() {
    let ctx = EmitContext::new("users", Engine::MySql);
    let out = JavaDtoEmitter
        .generate(
            stream(mysql_users()),
            &ctx,
            &json!({
                "data": true,
                "noArgsConstructor": true,
                "allArgsConstructor": true,
                "builder": true,
                "serializable": true,
                "swaggerAnnotations": true,
                "jacksonAnnotations": true,
                "extraSpacing": true
            }),
        )
        .expect("generation failed");

    insta::assert_snapshot!(out, @r#"
@Data
@NoArgsConstructor
@AllArgsConstructor
@Builder
public class Users implements Serializable {
    @Schema(description = "user id")
    @JsonProperty("id")
    private Integer id;

    @JsonProperty("createdAt")
    private LocalDateTime createdAt;

    @JsonProperty("name")
    private String name;
}
"#);
}

#[test]
fn test_mssql_record() {
    let ctx = EmitContext::with_affixes("accounts", Engine::SqlServer, "", "Record");
    let out = JavaRecordEmitter
        .generate(stream(mssql_accounts()), &ctx, &json!({}))
        .expect("generation failed");

    insta::assert_snapshot!(out, @r"
public record AccountsRecord(
    UUID accountId,
    BigDecimal balance,
    String displayName,
    OffsetDateTime openedAt
) {}
");
}

#[test]
fn test_postgres_xml_mapper_all_crud() {
    let ctx = EmitContext::new("orders", Engine::Postgres);
    let out = MyBatisXmlEmitter
        .generate(stream(postgres_orders()), &ctx, &json!({"allCrud": true}))
        .expect("generation failed");

    insta::assert_snapshot!(out, @r#"
<mapper namespace="OrdersRepository">
    <select id="selectOrders" resultType="OrdersResponse">
        SELECT
          order_id,
          line_no,
          sku,
          tags,
          payload,
          placed_at,
          insert_user_id,
          UPDATE_DTM
        FROM orders
    </select>

    <insert id="insertOrders" parameterType="OrdersDto">
        INSERT INTO orders (
          sku,
          tags,
          payload,
          placed_at,
          insert_ip,
          insert_user_id,
          insert_dtm
        ) VALUES (
          #{sku},
          #{tags},
          #{payload},
          #{placedAt},
          #{insertIp},
          #{insertUserId},
          CURRENT_TIMESTAMP(6)
        )
    </insert>

    <update id="updateOrders" parameterType="OrdersDto">
        UPDATE orders
        SET
          sku = #{sku},
          tags = #{tags},
          payload = #{payload},
          placed_at = #{placedAt},
          update_ip = #{updateIp},
          update_user_id = #{updateUserId},
          update_dtm = CURRENT_TIMESTAMP(6)
        WHERE TRUE
            AND order_id = #{orderId}
            AND line_no = #{lineNo}
    </update>

    <delete id="deleteOrders" parameterType="OrdersDto">
        DELETE
        FROM orders
        WHERE TRUE
            AND order_id = #{orderId}
            AND line_no = #{lineNo}
    </delete>
</mapper>
"#);
}

#[test]
fn test_annotation_mapper_update() {
    let ctx = EmitContext::new("users", Engine::MySql);
    let out = MyBatisAnnotationEmitter
        .generate(stream(mysql_users()), &ctx, &json!({"update": true}))
        .expect("generation failed");

    insta::assert_snapshot!(out, @r#"
import org.apache.ibatis.annotations.*;

@Mapper
public interface UsersRepository {
    @Update("""
        UPDATE users
        SET
          created_at = #{createdAt},
          name = #{name},
          update_ip = #{updateIp},
          update_user_id = #{updateUserId},
          update_dtm = CURRENT_TIMESTAMP(6)
        WHERE TRUE
            AND id = #{id}
        """)
    int updateUsers(UsersDto dto);
}
"#);
}

#[test]
fn test_key_conditions_follow_ordinal_order() {
    let ctx = EmitContext::new("orders", Engine::Postgres);
    let out = MyBatisXmlEmitter
        .generate(stream(postgres_orders()), &ctx, &json!({"update": true}))
        .expect("generation failed");

    let order_id = out.find("AND order_id").expect("order_id condition");
    let line_no = out.find("AND line_no").expect("line_no condition");
    assert!(order_id < line_no);
    assert_eq!(out.matches("AND ").count(), 2);
}
